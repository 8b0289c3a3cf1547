//! Error types for the record store.
//!
//! Repository implementations return [`StoreError`] so callers and tests can
//! inspect failure paths. [`crate::application::services::FavoritesService`]
//! logs these and converts them into boolean or absent results at its boundary.

use std::io;
use std::path::PathBuf;

/// Errors raised while reading or writing the record document.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The record file exists but could not be read.
    #[error("failed to read record file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The record file was read but is not a valid record document.
    #[error("record file {} is malformed: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The record could not be written to disk.
    #[error("failed to write record file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The record could not be encoded as JSON.
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    /// Returns true for the read-side failures (unreadable or malformed file).
    pub fn is_read_error(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Parse { .. })
    }
}

/// Result type for record store operations.
pub type StoreResult<T> = Result<T, StoreError>;
