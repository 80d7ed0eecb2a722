pub mod aggregate;
pub mod samples;

pub use aggregate::{Product, ProductDto};
pub use samples::sample_catalog;
