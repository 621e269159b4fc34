//! Generation metadata.
//!
//! Metadata is stamped once after a dataset is finalized. Stamping is pure:
//! the caller supplies the timestamp, so equal inputs give equal metadata.

use crate::canonical::content_hash;
use crate::error::MetadataError;
use chrono::{DateTime, SecondsFormat, Utc};
use fixture_core::{GenerationParameters, Record};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Generator name recorded in every metadata file.
pub const GENERATOR_NAME: &str = "fixture-gen";

/// Generator version recorded in every metadata file.
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Identifies the program that produced a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorInfo {
    pub generator: String,
    pub generator_version: String,
    pub runtime: String,
    /// Unix seconds at stamping time
    pub generation_time: f64,
}

impl GeneratorInfo {
    fn at(now: DateTime<Utc>) -> Self {
        Self {
            generator: GENERATOR_NAME.to_string(),
            generator_version: GENERATOR_VERSION.to_string(),
            runtime: format!("rust {}-{}", std::env::consts::ARCH, std::env::consts::OS),
            generation_time: now.timestamp_micros() as f64 / 1_000_000.0,
        }
    }
}

/// Read-only summary of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub version: String,
    /// RFC 3339 timestamp
    pub generated_at: String,
    pub generator_seed: u64,
    pub record_count: usize,
    pub generation_params: GenerationParameters,
    /// Lowercase hex SHA-256 of the canonical dataset
    pub data_hash: String,
    pub provenance: GeneratorInfo,
}

impl Metadata {
    /// Load metadata from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MetadataError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Pretty-printed JSON form.
    pub fn to_pretty_json(&self) -> Result<String, MetadataError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Build the metadata record for a finalized dataset.
pub fn stamp(
    dataset: &[Record],
    params: &GenerationParameters,
    now: DateTime<Utc>,
) -> Result<Metadata, MetadataError> {
    let data_hash = content_hash(dataset)?;
    debug!("Dataset of {} records hashes to {}", dataset.len(), data_hash);

    Ok(Metadata {
        version: params.version.clone(),
        generated_at: now.to_rfc3339_opts(SecondsFormat::Micros, true),
        generator_seed: params.seed,
        record_count: dataset.len(),
        generation_params: params.clone(),
        data_hash,
        provenance: GeneratorInfo::at(now),
    })
}

/// Check records read back from disk against their metadata.
///
/// Returns the recomputed hash on success.
pub fn verify_records(
    records: &[serde_json::Value],
    metadata: &Metadata,
) -> Result<String, MetadataError> {
    if records.len() != metadata.record_count {
        return Err(MetadataError::CountMismatch {
            expected: metadata.record_count,
            actual: records.len(),
        });
    }

    let actual = content_hash(records)?;
    if actual != metadata.data_hash {
        return Err(MetadataError::HashMismatch {
            expected: metadata.data_hash.clone(),
            actual,
        });
    }
    Ok(actual)
}
