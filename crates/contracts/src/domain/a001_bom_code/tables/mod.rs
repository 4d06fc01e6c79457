//! Reference option tables, one module per product family.
//!
//! Pure data: the tables are turned into `CodeSchema`s exactly once, when the
//! registry is first touched.

pub(crate) mod ice_tub;
pub(crate) mod outdoor;
pub(crate) mod pool;
pub(crate) mod power_standard;
