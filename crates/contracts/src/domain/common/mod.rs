//! Common types and traits shared by all catalog resources

pub mod resource;
pub mod serde_ext;

// Re-exports
pub use resource::Resource;
