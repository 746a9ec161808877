// Load error types
// The record asset is the only thing in this crate that can fail

use std::path::PathBuf;

use thiserror::Error;

pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but its root is not an array of records
    #[error("expected a JSON array of records, found {found}")]
    NotAnArray { found: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = LoadError::Io {
            path: PathBuf::from("/tmp/voters.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/voters.json"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_not_an_array_message() {
        let err = LoadError::NotAnArray { found: "an object" };
        assert_eq!(
            err.to_string(),
            "expected a JSON array of records, found an object"
        );
    }
}
