//! File loading module
//!
//! Single-attempt asynchronous reads for the request handlers.

use std::io;

use hyper::body::Bytes;
use thiserror::Error;
use tokio::fs;

/// Why a file could not be loaded.
///
/// Displays as `<kind> - <message>`, the shape the handlers log, e.g.
/// `NotFound - No such file or directory (os error 2)`.
#[derive(Debug, Error)]
#[error("{}", failure_reason(.0))]
pub struct LoadError(#[from] io::Error);

fn failure_reason(error: &io::Error) -> String {
    format!("{:?} - {error}", error.kind())
}

/// Read the file at `path` in full.
///
/// The path is probed first so an inaccessible file fails before any read
/// is attempted. One attempt, no retries.
pub async fn load_file(path: &str) -> Result<Bytes, LoadError> {
    fs::metadata(path).await?;
    let data = fs::read(path).await?;
    Ok(Bytes::from(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_loads_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"payload").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let data = load_file(&path).await.unwrap();
        assert_eq!(data, Bytes::from("payload"));
    }

    #[tokio::test]
    async fn test_missing_file_reports_kind_and_message() {
        let err = load_file("/no/such/file/anywhere").await.unwrap_err();
        let reason = err.to_string();
        assert!(reason.starts_with("NotFound - "), "got: {reason}");
    }

    #[tokio::test]
    async fn test_directory_is_not_loadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap().to_string();
        assert!(load_file(&path).await.is_err());
    }
}
