//! Error types for selene-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the selene-io crate.
///
/// Covers filesystem failures, malformed observation exports, taxon lookups
/// that match nothing, and report serialization.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when a file exists but cannot be read.
    #[error("failed to read {}: {reason}", path.display())]
    Read {
        /// Path of the file.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when an observation export is not valid JSON of the expected shape.
    #[error("failed to parse observation export: {reason}")]
    Parse {
        /// Description of the JSON error, including line and column.
        reason: String,
    },

    /// Returned when no observation in the source belongs to the taxon.
    #[error("taxon {taxon_id} not found in observation source")]
    TaxonNotFound {
        /// The requested taxon id.
        taxon_id: u64,
    },

    /// Returned when a report cannot be written.
    #[error("failed to write {}: {reason}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when a report cannot be serialized.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the serializer failure.
        reason: String,
    },
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Parse {
            reason: e.to_string(),
        }
    }
}
