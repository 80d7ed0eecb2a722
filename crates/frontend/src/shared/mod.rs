pub mod api_utils;
pub mod cache_cell;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod modal_stack;
pub mod notify;
