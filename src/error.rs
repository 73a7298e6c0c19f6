//! Error type for boundary validation and I/O.
//!
//! The listing engine itself never fails; these errors only come from parsing
//! user-facing values (page sizes, config files) and from the visit store.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the crate's boundaries.
#[derive(Debug, Error)]
pub enum Error {
    /// A page size outside the offered options (6, 9, 12 or "all"), or zero.
    #[error("invalid page size {0:?}: expected one of 6, 9, 12 or \"all\"")]
    InvalidPageSize(String),

    /// Config file could not be parsed.
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// File read or write failed.
    #[error("failed to access {path:?}: {source}")]
    Io {
        /// File that was being accessed.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// JSON (item list or visit file) could not be parsed or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No platform data directory could be determined for the visit file.
    #[error("no data directory available for the visit store")]
    NoDataDir,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
