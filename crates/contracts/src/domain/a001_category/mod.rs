pub mod aggregate;

pub use aggregate::{default_categories, Category, CategoryDto, DEFAULT_CATEGORY_NAMES};
