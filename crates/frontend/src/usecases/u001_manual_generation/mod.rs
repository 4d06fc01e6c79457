//! Генерация спецификации и инструкции по OCR-документам сессии
//!
//! - api.rs: REST wrappers for generation, saved results and truth
//! - view_model.rs: commands and editor state
//! - view.rs: manual review page

pub mod api;
mod view;
mod view_model;

pub use view::ManualReviewPage;
pub use view_model::ManualGenerationViewModel;
