//! Content typing module
//!
//! Couples a response payload with its resolved Content-Type and byte
//! length.

use std::path::Path;

use hyper::body::Bytes;

/// A response payload together with its Content-Type and length.
///
/// `length` is always the byte length of `body`; both are fixed at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    content_type: &'static str,
    length: usize,
    body: Bytes,
}

impl Content {
    /// Build content typed by file extension (without the leading dot).
    pub fn by_extension(extension: &str, body: impl Into<Bytes>) -> Self {
        let body = body.into();
        Self {
            content_type: content_type_for(extension),
            length: body.len(),
            body,
        }
    }

    /// Build content typed by the final extension of `path`.
    pub fn from_path(path: &str, body: impl Into<Bytes>) -> Self {
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");
        Self::by_extension(extension, body)
    }

    /// Build plain-text content.
    pub fn text(text: impl Into<String>) -> Self {
        let body = Bytes::from(text.into());
        Self {
            content_type: "text/plain; charset=utf-8",
            length: body.len(),
            body,
        }
    }

    pub const fn content_type(&self) -> &'static str {
        self.content_type
    }

    pub const fn length(&self) -> usize {
        self.length
    }

    pub fn into_body(self) -> Bytes {
        self.body
    }
}

/// Get MIME Content-Type based on file extension
///
/// Every mapping carries the `; charset=utf-8` suffix, binary types
/// included. Unknown extensions fall back to `application/octet-stream`.
pub fn content_type_for(extension: &str) -> &'static str {
    match extension {
        // Text
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "txt" | "md" => "text/plain; charset=utf-8",
        "xml" => "application/xml; charset=utf-8",

        // JavaScript
        "js" | "mjs" => "application/javascript; charset=utf-8",
        "json" => "application/json; charset=utf-8",

        // Images
        "png" => "image/png; charset=utf-8",
        "jpg" | "jpeg" => "image/jpeg; charset=utf-8",
        "gif" => "image/gif; charset=utf-8",
        "svg" => "image/svg+xml; charset=utf-8",
        "ico" => "image/x-icon; charset=utf-8",
        "webp" => "image/webp; charset=utf-8",

        // Fonts
        "woff" => "font/woff; charset=utf-8",
        "woff2" => "font/woff2; charset=utf-8",

        // Documents
        "pdf" => "application/pdf; charset=utf-8",

        // Default
        _ => "application/octet-stream; charset=utf-8",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(content_type_for("html"), "text/html; charset=utf-8");
        assert_eq!(content_type_for("css"), "text/css; charset=utf-8");
        assert_eq!(
            content_type_for("js"),
            "application/javascript; charset=utf-8"
        );
        assert_eq!(content_type_for("json"), "application/json; charset=utf-8");
        assert_eq!(content_type_for("png"), "image/png; charset=utf-8");
    }

    #[test]
    fn test_every_type_carries_charset() {
        for ext in ["html", "css", "js", "png", "jpg", "woff2", "pdf", "xyz"] {
            assert!(
                content_type_for(ext).ends_with("; charset=utf-8"),
                "no charset suffix for {ext}"
            );
        }
    }

    #[test]
    fn test_unknown_extension_falls_back_to_octet_stream() {
        assert_eq!(
            content_type_for("xyz"),
            "application/octet-stream; charset=utf-8"
        );
        assert_eq!(
            content_type_for(""),
            "application/octet-stream; charset=utf-8"
        );
    }

    #[test]
    fn test_by_extension_sets_type_and_length() {
        let content = Content::by_extension("js", "var x = 1;");
        assert_eq!(
            content.content_type(),
            "application/javascript; charset=utf-8"
        );
        assert_eq!(content.length(), 10);
        assert_eq!(content.into_body(), Bytes::from("var x = 1;"));
    }

    #[test]
    fn test_from_path_uses_final_extension() {
        let content = Content::from_path("webapp/js/app.min.js", "x");
        assert_eq!(
            content.content_type(),
            "application/javascript; charset=utf-8"
        );

        let content = Content::from_path("webapp/data/blob", "x");
        assert_eq!(
            content.content_type(),
            "application/octet-stream; charset=utf-8"
        );
    }

    #[test]
    fn test_text_length_counts_bytes() {
        let content = Content::text("héllo");
        assert_eq!(content.content_type(), "text/plain; charset=utf-8");
        assert_eq!(content.length(), 6);
    }
}
