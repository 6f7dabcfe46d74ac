//! Error types for document combining operations
//!
//! Fatal errors short-circuit a request and surface as a single message;
//! per-asset download failures never reach this type — they are recorded in
//! the [`InlineReport`](crate::inline::InlineReport) and the affected
//! reference nodes are left untouched.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for combining operations
pub type FuseResult<T> = Result<T, FuseError>;

/// Fatal error conditions for a combine request
#[derive(Debug, Error)]
pub enum FuseError {
    /// The uploaded archive holds no HTML document anywhere in its tree
    #[error("no HTML document found in the uploaded archive")]
    NoDocumentFound,

    /// The initial document request failed (non-2xx status or transport error)
    #[error("failed to fetch {url}: {reason}")]
    PrimaryFetchFailed { url: String, reason: String },

    /// A local file in the extracted bundle could not be read
    #[error("failed to read {}: {source}", path.display())]
    FilesystemReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The uploaded archive could not be opened or extracted
    #[error("failed to extract archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// The request URL is not a parsable absolute URL
    #[error("invalid URL '{0}'")]
    InvalidUrl(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for FuseError {
    fn from(err: anyhow::Error) -> Self {
        // Use {:#} to preserve full error chain with context
        Self::Other(format!("{err:#}"))
    }
}

impl FuseError {
    /// Attach path context to an I/O error from the bundle pipeline
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FilesystemReadFailed {
            path: path.into(),
            source,
        }
    }
}
