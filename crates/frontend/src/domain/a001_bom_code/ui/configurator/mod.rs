//! BOM code configurator
//!
//! - view_model.rs: selection state and commands (encode, decode, save, OCR generation)
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::BomConfigurator;
pub use view_model::BomConfiguratorViewModel;
