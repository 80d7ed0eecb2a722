pub mod aggregate;

pub use aggregate::{ContactRequest, ContactRequestDto, DEFAULT_COUNTRY_CODE};
