//! Logging helpers
//!
//! Startup banner on stdout, timestamped diagnostics on stderr.
//! There is no access log; only failures are reported.

use chrono::Local;

pub fn log_server_start(port: u16) {
    println!("Starting HTTP server. http://localhost:{port}/");
}

pub fn log_accept_error(err: &std::io::Error) {
    eprintln!("[{}] [Error] Failed to accept connection: {err}", timestamp());
}

pub fn log_connection_error(err: &impl std::fmt::Display) {
    eprintln!("[{}] [Error] Failed to serve connection: {err}", timestamp());
}

/// Diagnostic emitted before every 404/500 response
pub fn log_read_error(path: &str, detail: &str) {
    eprintln!("[{}] [Error] Error serving {path}: {detail}", timestamp());
}

pub fn log_error(message: &str) {
    eprintln!("[{}] [Error] {message}", timestamp());
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
