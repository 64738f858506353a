//! Add/edit form of a product line.
//!
//! - view_model.rs: opens the form on the modal stack
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ProductLineDetails;
pub use view_model::{open_product_line_details, ProductLineDetailsViewModel};
