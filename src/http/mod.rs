//! HTTP protocol layer module
//!
//! MIME lookup and response builders, decoupled from request handling.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{build_error_response, build_file_response, build_not_found_response};
