//! Static file serving module
//!
//! Entry point for HTTP request processing: path resolution, MIME type
//! detection, file loading, and error-to-status mapping.

use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::io::ErrorKind;
use tokio::fs;

/// Outcome of a file read, with the two failure kinds the
/// response mapping distinguishes.
#[derive(Debug)]
pub enum ReadError {
    /// The file does not exist at the resolved path (maps to 404)
    NotFound,
    /// Any other I/O failure: permission denied, is-a-directory, etc.
    /// (maps to 500, with the message embedded in the body)
    Other(std::io::Error),
}

/// Main entry point for HTTP request handling
///
/// Invoked once per request by the connection driver. Every failure
/// path resolves to a valid response, so the error type is
/// [`Infallible`].
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let path = rewrite_root(req.uri().path());
    Ok(serve_path(path).await)
}

/// Resolve a request path to a file on disk and build the response
pub async fn serve_path(path: &str) -> Response<Full<Bytes>> {
    let content_type = mime::content_type_for(extension_of(path));

    match load_file(normalize(path)).await {
        Ok(content) => http::build_file_response(content, content_type),
        Err(ReadError::NotFound) => {
            logger::log_read_error(path, "file not found");
            http::build_not_found_response(path)
        }
        Err(ReadError::Other(e)) => {
            let detail = e.to_string();
            logger::log_read_error(path, &detail);
            http::build_error_response(&detail)
        }
    }
}

/// Rewrite the root path to the index document
fn rewrite_root(path: &str) -> &str {
    if path.is_empty() || path == "/" {
        "/index.html"
    } else {
        path
    }
}

/// Extract the file extension, dot included
///
/// With no dot present this returns the whole path, which is then
/// looked up as-is against the MIME table and misses.
fn extension_of(path: &str) -> &str {
    match path.rfind('.') {
        Some(idx) => &path[idx..],
        None => path,
    }
}

/// Strip leading slashes, turning the request path into a path
/// relative to the working directory.
///
/// Only leading separators are removed; embedded `..` segments pass
/// through untouched, so the result can still escape the working
/// directory. Run this server only on trees you are happy to expose.
fn normalize(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Read a file, tagging the failure kind
async fn load_file(path: &str) -> Result<Vec<u8>, ReadError> {
    fs::read(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => ReadError::NotFound,
        _ => ReadError::Other(e),
    })
}
