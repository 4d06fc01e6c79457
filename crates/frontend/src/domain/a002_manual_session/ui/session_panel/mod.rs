//! Manual session panel
//!
//! - view_model.rs: upload, OCR trigger and progress polling
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::SessionPanel;
pub use view_model::SessionPanelViewModel;
