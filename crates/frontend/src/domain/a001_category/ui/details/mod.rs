//! Category Details UI Module
//!
//! - view_model.rs: form state, validation and save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::CategoryDetails;
pub use view_model::CategoryDetailsViewModel;
