pub mod configurator;
pub mod details;
pub mod summary;
