//! Error types for hashing and metadata handling.

use thiserror::Error;

/// Errors that can occur while hashing, stamping or verifying datasets.
#[derive(Error, Debug)]
pub enum MetadataError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The recomputed content hash differs from the recorded one.
    #[error("Data hash mismatch: metadata records {expected}, data hashes to {actual}")]
    HashMismatch { expected: String, actual: String },

    /// The number of records differs from the recorded count.
    #[error("Record count mismatch: metadata records {expected}, data has {actual}")]
    CountMismatch { expected: usize, actual: usize },
}
