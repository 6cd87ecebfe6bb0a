//! HTTP-date module
//!
//! Formats Date header values as RFC 7231 IMF-fixdate.

use chrono::Utc;

const IMF_FIXDATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Current UTC time, e.g. `Sat, 22 Aug 2026 20:15:30 GMT`.
pub fn http_date() -> String {
    Utc::now().format(IMF_FIXDATE).to_string()
}
