//! MIME type lookup module
//!
//! Maps a file extension (with its leading dot) to a Content-Type string.

/// Get the MIME Content-Type for a file extension.
///
/// The `extension` argument includes the leading dot, e.g. `".html"`.
/// Anything not in the table (including a whole path with no dot in it)
/// falls back to `application/octet-stream`.
pub fn content_type_for(extension: &str) -> &'static str {
    match extension {
        ".html" => "text/html",
        ".js" => "text/javascript",
        ".css" => "text/css",
        ".png" => "image/png",
        ".jpg" | ".jpeg" => "image/jpeg",
        ".gif" => "image/gif",
        ".svg" => "image/svg+xml",
        ".json" => "application/json",
        ".woff" => "font/woff",
        ".woff2" => "font/woff2",
        ".ttf" => "font/ttf",
        ".otf" => "font/otf",
        ".gltf" => "model/gltf+json",
        ".glb" => "model/gltf-binary",
        _ => "application/octet-stream",
    }
}
