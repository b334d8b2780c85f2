//! Request handler module
//!
//! One handler: static file serving relative to the working directory.

pub mod static_files;

// Re-export main entry point
pub use static_files::handle_request;
