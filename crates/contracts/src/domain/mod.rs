pub mod a001_category;
pub mod a002_product;
pub mod a003_contact_request;
pub mod common;
