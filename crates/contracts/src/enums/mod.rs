pub mod bom_family;

pub use bom_family::BomFamily;
