pub mod sanitize;
pub mod upload;
