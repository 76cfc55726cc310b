//! Snapshot loading error types.

use std::path::PathBuf;

use super::convert::ConversionError;

/// Errors that can occur when loading a trip snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Reading the snapshot file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot is not valid JSON for a trip
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot contents failed validation
    #[error("invalid snapshot: {0}")]
    Conversion(#[from] ConversionError),
}
