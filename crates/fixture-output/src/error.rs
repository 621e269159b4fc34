//! Error types for fixture output.

use fixture_core::FixtureError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing or reading fixture files.
#[derive(Error, Debug)]
pub enum OutputError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Parameter error.
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// The file extension maps to no known format.
    #[error("Cannot infer fixture format from file name: {}", .0.display())]
    UnknownExtension(PathBuf),
}
