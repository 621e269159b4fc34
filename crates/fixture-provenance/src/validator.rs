//! Structural validation of provenance documents.

use crate::error::ProvenanceError;
use chrono::DateTime;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Top-level sections every provenance document must carry.
pub const REQUIRED_SECTIONS: [&str; 4] = ["provenance", "source", "transformations", "quality"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationChecks {
    pub schema_valid: bool,
    pub timestamps_valid: bool,
}

/// Outcome of validating one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub checks: ValidationChecks,
}

/// Check a parsed document. Missing sections are errors, a bad
/// `provenance.created_at` is a warning.
pub fn validate_document(document: &serde_json::Value) -> ValidationReport {
    let mut report = ValidationReport {
        valid: true,
        ..Default::default()
    };

    let missing: Vec<&str> = REQUIRED_SECTIONS
        .into_iter()
        .filter(|key| document.get(key).is_none())
        .collect();
    if missing.is_empty() {
        report.checks.schema_valid = true;
    } else {
        report.valid = false;
        report
            .errors
            .push(format!("missing sections: {}", missing.join(", ")));
    }

    let created_at = document
        .get("provenance")
        .and_then(|p| p.get("created_at"))
        .and_then(|t| t.as_str());
    match created_at {
        Some(ts) if DateTime::parse_from_rfc3339(ts).is_ok() => report.checks.timestamps_valid = true,
        Some(ts) => report
            .warnings
            .push(format!("created_at is not an RFC 3339 timestamp: {ts}")),
        None => report.warnings.push("created_at is missing".to_string()),
    }

    report
}

/// Validate one document file.
///
/// Unparsable JSON and missing sections are reported as `MalformedFixture`.
pub fn validate_file(path: &Path) -> Result<ValidationReport, ProvenanceError> {
    let content = fs::read_to_string(path)?;
    let malformed = |reason: String| ProvenanceError::MalformedFixture {
        path: path.to_path_buf(),
        reason,
    };

    let document: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| malformed(e.to_string()))?;
    let report = validate_document(&document);
    if !report.valid {
        return Err(malformed(report.errors.join("; ")));
    }
    Ok(report)
}

/// Results of validating a set of documents.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub results: Vec<(PathBuf, Result<ValidationReport, ProvenanceError>)>,
}

impl BatchReport {
    /// Validate every file, continuing past failures.
    pub fn validate_all(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let results = paths
            .into_iter()
            .map(|path| {
                let result = validate_file(&path);
                if let Err(e) = &result {
                    warn!("{}", e);
                }
                (path, result)
            })
            .collect();
        Self { results }
    }

    pub fn invalid_count(&self) -> usize {
        self.results.iter().filter(|(_, r)| r.is_err()).count()
    }

    pub fn is_valid(&self) -> bool {
        self.invalid_count() == 0
    }
}
