mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::{open_product_details, ProductDetailsViewModel};
