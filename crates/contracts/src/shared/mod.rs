pub mod api_error;
pub mod config;
pub mod derived_view;
pub mod fetch_fence;
pub mod query;
pub mod validation;
