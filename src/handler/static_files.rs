//! Static file serving and concatenation module
//!
//! The two behaviors behind the router: mapped single-file serving and
//! ordered multi-file concatenation.

use std::future::Future;
use std::io;

use futures::future::join_all;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode, Uri};

use crate::config::Config;
use crate::handler::loader::{self, LoadError};
use crate::handler::router;
use crate::http::content::Content;
use crate::http::response::write_response;
use crate::logger;

/// Serve the file the request path maps to under the web root.
///
/// `/` is replaced by the configured index path before mapping. Paths
/// carrying a `..` segment are refused with the same response a missing
/// file produces.
pub async fn serve_static(uri: &Uri, config: &Config) -> Response<Full<Bytes>> {
    let url_path = uri.path();
    logger::trace(&format!("[static] url path: {url_path}"));

    let request_path = if url_path == "/" {
        config.site.index_path.as_str()
    } else {
        url_path
    };

    let file_path = format!("{}{request_path}", config.site.web_root);
    logger::debug(&format!("[static] file path: {file_path}"));

    if has_parent_segment(request_path) {
        logger::warn(&format!(
            "[static] refused parent-directory path: {url_path}"
        ));
        return file_not_found(&file_path, config);
    }

    match loader::load_file(&file_path).await {
        Ok(data) => {
            logger::debug(&format!("Loaded file data from \"{file_path}\""));
            write_response(
                Some(StatusCode::OK),
                Some(Content::from_path(&file_path, data)),
                &config.http.server_name,
            )
        }
        Err(err) => {
            logger::warn(&format!(
                "File at \"{file_path}\" does not exist or could not be read. MSG: \"{err}\""
            ));
            file_not_found(&file_path, config)
        }
    }
}

/// Serve the concatenation of the requested JS members.
pub async fn serve_concat_js(uri: &Uri, config: &Config) -> Response<Full<Bytes>> {
    serve_concatenated(uri, config, &config.site.concat_js_folder, ".js").await
}

/// Serve the concatenation of the requested CSS members.
pub async fn serve_concat_css(uri: &Uri, config: &Config) -> Response<Full<Bytes>> {
    serve_concatenated(uri, config, &config.site.concat_css_folder, ".css").await
}

/// Concatenate the members named by the `files` query parameter.
///
/// Member names are comma-separated and resolve to
/// `<web_root><folder><name><extension>`. All members load concurrently;
/// the joined body preserves the order they were requested in, and a
/// member that fails to load contributes nothing to it.
async fn serve_concatenated(
    uri: &Uri,
    config: &Config,
    folder: &str,
    extension: &str,
) -> Response<Full<Bytes>> {
    let query = router::query_map(uri);
    let files = query.get("files").map_or("", String::as_str);

    if files.is_empty() {
        logger::warn(&format!(
            "[concat] missing files parameter for {extension} request"
        ));
        let message = format!(
            "Requested a concatenated {extension} file but did not provide files to concat!"
        );
        return write_response(
            Some(StatusCode::NOT_FOUND),
            Some(Content::text(message)),
            &config.http.server_name,
        );
    }

    let members: Vec<&str> = files.split(',').collect();
    logger::debug(&format!(
        "[concat] loading {} members from {folder}, extension {extension}",
        members.len()
    ));

    let loads: Vec<_> = members
        .iter()
        .map(|member| {
            let file_path = format!("{}{folder}{member}{extension}", config.site.web_root);
            load_member(member, file_path)
        })
        .collect();

    let body = join_in_order(loads).await;

    write_response(
        Some(StatusCode::OK),
        Some(Content::by_extension(
            extension.trim_start_matches('.'),
            body,
        )),
        &config.http.server_name,
    )
}

/// Load one concatenation member, logging the outcome.
///
/// A member name carrying a `..` segment is refused before any filesystem
/// access and contributes nothing, like any failed load.
async fn load_member(member: &str, file_path: String) -> Result<Bytes, LoadError> {
    if has_parent_segment(member) {
        logger::warn(&format!("[concat] refused parent-directory member: {member}"));
        return Err(LoadError::from(io::Error::new(
            io::ErrorKind::InvalidInput,
            "member climbs out of the concat folder",
        )));
    }

    match loader::load_file(&file_path).await {
        Ok(data) => {
            logger::debug(&format!("Loaded file data from \"{file_path}\""));
            Ok(data)
        }
        Err(err) => {
            logger::warn(&format!(
                "File at \"{file_path}\" does not exist or could not be read. MSG: \"{err}\""
            ));
            Err(err)
        }
    }
}

/// Drive all loads concurrently and join the payloads in the order given.
/// A failed load is skipped, leaving an empty contribution at its slot.
async fn join_in_order<F>(loads: Vec<F>) -> Vec<u8>
where
    F: Future<Output = Result<Bytes, LoadError>>,
{
    let mut joined = Vec::new();
    for outcome in join_all(loads).await {
        if let Ok(data) = outcome {
            joined.extend_from_slice(&data);
        }
    }
    joined
}

/// The canonical not-found response for a file path.
fn file_not_found(file_path: &str, config: &Config) -> Response<Full<Bytes>> {
    let message = format!("File at \"{file_path}\" does not exist or could not be read.");
    write_response(
        Some(StatusCode::NOT_FOUND),
        Some(Content::text(message)),
        &config.http.server_name,
    )
}

fn has_parent_segment(path: &str) -> bool {
    path.split('/').any(|segment| segment == "..")
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::BoxFuture;
    use futures::FutureExt;
    use std::io;
    use std::io::Write;
    use std::time::Duration;

    fn loaded(data: &'static str) -> BoxFuture<'static, Result<Bytes, LoadError>> {
        async move { Ok(Bytes::from(data)) }.boxed()
    }

    fn missing() -> BoxFuture<'static, Result<Bytes, LoadError>> {
        async {
            Err(LoadError::from(io::Error::new(
                io::ErrorKind::NotFound,
                "no such member",
            )))
        }
        .boxed()
    }

    fn delayed(
        data: &'static str,
        delay: Duration,
    ) -> BoxFuture<'static, Result<Bytes, LoadError>> {
        async move {
            tokio::time::sleep(delay).await;
            Ok(Bytes::from(data))
        }
        .boxed()
    }

    #[tokio::test]
    async fn test_join_keeps_given_order_under_slow_io() {
        let joined = join_in_order(vec![
            delayed("first;", Duration::from_millis(50)),
            loaded("second;"),
            delayed("third;", Duration::from_millis(20)),
        ])
        .await;
        assert_eq!(joined, b"first;second;third;");
    }

    #[tokio::test]
    async fn test_failed_member_contributes_nothing() {
        let joined = join_in_order(vec![loaded("a"), missing(), loaded("b")]).await;
        assert_eq!(joined, b"ab");
    }

    #[tokio::test]
    async fn test_all_failed_members_join_to_empty() {
        let joined = join_in_order(vec![missing(), missing()]).await;
        assert!(joined.is_empty());
    }

    #[tokio::test]
    async fn test_parent_member_refused_even_when_target_exists() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"reachable").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let err = load_member("../x", path).await.unwrap_err();
        assert!(
            err.to_string().starts_with("InvalidInput - "),
            "got: {err}"
        );
    }

    #[test]
    fn test_parent_segments_detected() {
        assert!(has_parent_segment("/../etc/passwd"));
        assert!(has_parent_segment("/js/../../secret"));
        assert!(!has_parent_segment("/js/app..js"));
        assert!(!has_parent_segment("/index.html"));
    }
}
