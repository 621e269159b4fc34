//! Error types for provenance handling.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building, storing or validating provenance.
#[derive(Error, Debug)]
pub enum ProvenanceError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A provenance document that cannot be parsed or lacks required sections.
    #[error("Malformed fixture '{}': {reason}", path.display())]
    MalformedFixture { path: PathBuf, reason: String },
}
