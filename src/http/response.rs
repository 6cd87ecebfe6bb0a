//! HTTP response writing module
//!
//! Builds the single response shape the server emits, decoupled from
//! routing business logic. Handing the response back to hyper terminates
//! the exchange, so nothing can be written twice.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::http::content::Content;
use crate::http::date;
use crate::logger;

/// Build a response from optional parts.
///
/// A missing status becomes 500 Internal Server Error and missing content
/// becomes the plain-text `No content returned` body. Every response is
/// stamped with Content-Language, Content-Length, Content-Type, Date and
/// Server headers.
pub fn write_response(
    status: Option<StatusCode>,
    content: Option<Content>,
    server_name: &str,
) -> Response<Full<Bytes>> {
    let status = status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let content = content.unwrap_or_else(|| Content::text("No content returned"));

    Response::builder()
        .status(status)
        .header("Content-Language", "en")
        .header("Content-Length", content.length())
        .header("Content-Type", content.content_type())
        .header("Date", date::http_date())
        .header("Server", server_name)
        .body(Full::new(content.into_body()))
        .unwrap_or_else(|e| {
            logger::error(&format!("Failed to build {status} response: {e}"));
            Response::new(Full::new(Bytes::new()))
        })
}
