//! Errors raised while loading a catalog definition.

use std::path::PathBuf;

use thiserror::Error;

/// Failures encountered while reading a catalog definition.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The definition file could not be read.
    #[error("failed to read catalog {path}: {source}", path = .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The definition is not valid catalog JSON.
    #[error("invalid catalog definition: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_path() {
        let error = CatalogError::Io {
            path: PathBuf::from("catalog.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        assert_eq!(
            error.to_string(),
            "failed to read catalog catalog.json: file not found"
        );
    }

    #[test]
    fn json_error_converts_from_serde() {
        let Err(source) = serde_json::from_str::<serde_json::Value>("{") else {
            panic!("truncated JSON should not parse");
        };
        let error: CatalogError = source.into();
        assert!(error.to_string().starts_with("invalid catalog definition:"));
    }
}
