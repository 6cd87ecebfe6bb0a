//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for query parsing,
//! route matching and dispatching.

use std::collections::HashMap;
use std::convert::Infallible;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response, Uri};
use percent_encoding::percent_decode_str;

use crate::config::Config;
use crate::handler::static_files;
use crate::logger;

/// Main entry point for HTTP request handling
///
/// Total over its input: every request produces exactly one response, so
/// the error type is `Infallible`. Dispatch is on the exact URL path; the
/// two concatenation routes are checked first and everything else is
/// served as a static file.
pub async fn handle_request<B>(
    req: Request<B>,
    config: &Config,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let (parts, _) = req.into_parts();

    if config.logging.access_log {
        logger::log_request(&parts.method, &parts.uri, parts.version);
    }

    let response = route_request(&parts.uri, config).await;

    if config.logging.access_log {
        logger::log_response(response.status(), content_length_of(&response));
    }

    Ok(response)
}

/// Route request based on path and configuration
async fn route_request(uri: &Uri, config: &Config) -> Response<Full<Bytes>> {
    let path = uri.path();

    if path == config.site.concat_js_route {
        return static_files::serve_concat_js(uri, config).await;
    }

    if path == config.site.concat_css_route {
        return static_files::serve_concat_css(uri, config).await;
    }

    static_files::serve_static(uri, config).await
}

/// Parse the query component into a key/value map.
///
/// An absent query yields an empty map. Pairs are `&`-separated; a key
/// without `=` maps to the empty string; a later duplicate of a key
/// replaces the earlier one. Keys and values are percent-decoded.
pub fn query_map(uri: &Uri) -> HashMap<String, String> {
    let Some(query) = uri.query() else {
        return HashMap::new();
    };

    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (decode_component(key), decode_component(value)),
            None => (decode_component(pair), String::new()),
        })
        .collect()
}

/// Percent-decode one query component, falling back to the raw text when
/// the decoded bytes are not valid UTF-8.
fn decode_component(raw: &str) -> String {
    percent_decode_str(raw)
        .decode_utf8()
        .map_or_else(|_| raw.to_string(), |decoded| decoded.into_owned())
}

fn content_length_of(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get("Content-Length")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}
