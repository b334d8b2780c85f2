//! HTTP response building module
//!
//! Builders for the three response shapes the server produces,
//! decoupled from path resolution and file loading.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build a 200 OK response carrying file bytes
pub fn build_file_response(content: Vec<u8>, content_type: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("content-type", content_type)
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a 404 Not Found response for a missing file
///
/// The body carries the path exactly as the client requested it,
/// not the normalized filesystem path.
pub fn build_not_found_response(path: &str) -> Response<Full<Bytes>> {
    let body = format!("File not found: {path}");
    Response::builder()
        .status(404)
        .header("content-type", "text/plain")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a 500 Internal Server Error response with the failure detail
pub fn build_error_response(detail: &str) -> Response<Full<Bytes>> {
    let body = format!("Internal server error: {detail}");
    Response::builder()
        .status(500)
        .header("content-type", "text/plain")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_bytes(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body()
            .collect()
            .await
            .expect("collect Full body")
            .to_bytes()
    }

    #[tokio::test]
    async fn test_file_response() {
        let resp = build_file_response(b"hello".to_vec(), "text/html");
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-type"], "text/html");
        assert_eq!(body_bytes(resp).await, Bytes::from_static(b"hello"));
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let resp = build_not_found_response("/missing.html");
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["content-type"], "text/plain");
        assert_eq!(
            body_bytes(resp).await,
            Bytes::from_static(b"File not found: /missing.html")
        );
    }

    #[tokio::test]
    async fn test_error_response() {
        let resp = build_error_response("permission denied");
        assert_eq!(resp.status(), 500);
        assert_eq!(
            body_bytes(resp).await,
            Bytes::from_static(b"Internal server error: permission denied")
        );
    }
}
