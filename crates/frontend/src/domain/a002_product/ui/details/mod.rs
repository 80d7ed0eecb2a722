//! Product Details UI Module
//!
//! - view_model.rs: form state, category lookup, load/save commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;
