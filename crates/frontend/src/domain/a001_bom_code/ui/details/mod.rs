mod view;
mod view_model;

pub use view::BomDetail;
pub use view_model::BomDetailViewModel;
