//! The provenance document written for each fixture file.

use chrono::{DateTime, SecondsFormat, Utc};
use fixture_core::{Category, SizeClass};
use fixture_metadata::{Metadata, GENERATOR_NAME, GENERATOR_VERSION};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Component, Path};
use tracing::debug;

use crate::error::ProvenanceError;

/// Version of the provenance document layout.
pub const PROVENANCE_VERSION: &str = "1.0.0";

/// Hex characters kept from the path digest.
const ID_LENGTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceDocument {
    pub provenance: ProvenanceInfo,
    pub source: SourceInfo,
    pub transformations: Vec<serde_json::Value>,
    pub quality: Quality,
    pub lineage: Lineage,
    pub dependencies: Dependencies,
    pub compliance: Compliance,
    pub audit_trail: Vec<AuditEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceInfo {
    pub id: String,
    pub version: String,
    pub created_at: String,
    pub created_by: String,
    pub description: String,
    pub tags: Vec<String>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceInfo {
    #[serde(rename = "type")]
    pub source_type: String,
    pub origin: Origin,
    pub acquisition: Acquisition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Acquisition {
    pub method: String,
    pub timestamp: String,
    pub parameters: AcquisitionParameters,
}

/// Generation parameters recovered from the fixture's metadata file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionParameters {
    pub seed: Option<u64>,
    pub count: Option<usize>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quality {
    pub validation: QualityValidation,
    pub metrics: QualityMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityValidation {
    pub timestamp: String,
    pub tool: String,
    pub version: String,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub record_count: usize,
    pub file_size_bytes: u64,
    pub encoding: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lineage {
    pub nodes: Vec<serde_json::Value>,
    pub edges: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dependencies {
    pub direct: Vec<serde_json::Value>,
    pub transitive: Vec<serde_json::Value>,
    pub tools: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Compliance {
    pub standards: Vec<serde_json::Value>,
    pub certifications: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: String,
    pub actor: String,
    pub action: String,
    pub resource: String,
    pub details: serde_json::Value,
}

/// Stable identifier of a fixture: a prefix of the SHA-256 of its path.
pub fn fixture_id(path: &Path) -> String {
    let digest = Sha256::digest(path.to_string_lossy().as_bytes());
    let mut id = hex::encode(digest);
    id.truncate(ID_LENGTH);
    id
}

/// Category names, then size class names, that appear as path components.
pub fn extract_tags(path: &Path) -> Vec<String> {
    let parts: Vec<&str> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect();

    let categories = Category::ALL.into_iter().map(|c| c.as_str());
    let sizes = SizeClass::ALL.into_iter().map(|s| s.as_str());
    categories
        .chain(sizes)
        .filter(|name| parts.contains(name))
        .map(str::to_string)
        .collect()
}

/// Build the provenance document of one data file.
///
/// `metadata` is the fixture's sibling metadata file when one exists.
pub fn build_document(
    fixture_path: &Path,
    metadata: Option<&Metadata>,
    now: DateTime<Utc>,
) -> Result<ProvenanceDocument, ProvenanceError> {
    let timestamp = now.to_rfc3339_opts(SecondsFormat::Micros, true);
    let file_size_bytes = fs::metadata(fixture_path)?.len();
    let record_count = match fixture_output::read_records(fixture_path) {
        Ok(records) => records.len(),
        Err(e) => {
            debug!("Could not count records in '{}': {}", fixture_path.display(), e);
            0
        }
    };

    let parameters = metadata
        .map(|m| AcquisitionParameters {
            seed: Some(m.generator_seed),
            count: Some(m.record_count),
            format: Some(m.generation_params.format.to_string()),
        })
        .unwrap_or_default();

    let file_name = fixture_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(ProvenanceDocument {
        provenance: ProvenanceInfo {
            id: fixture_id(fixture_path),
            version: PROVENANCE_VERSION.to_string(),
            created_at: timestamp.clone(),
            created_by: "system".to_string(),
            description: format!("Provenance for {file_name}"),
            tags: extract_tags(fixture_path),
            status: "active".to_string(),
        },
        source: SourceInfo {
            source_type: "synthetic".to_string(),
            origin: Origin {
                name: GENERATOR_NAME.to_string(),
                version: GENERATOR_VERSION.to_string(),
            },
            acquisition: Acquisition {
                method: "generation".to_string(),
                timestamp: timestamp.clone(),
                parameters,
            },
        },
        transformations: Vec::new(),
        quality: Quality {
            validation: QualityValidation {
                timestamp: timestamp.clone(),
                tool: GENERATOR_NAME.to_string(),
                version: GENERATOR_VERSION.to_string(),
                issues: Vec::new(),
            },
            metrics: QualityMetrics {
                record_count,
                file_size_bytes,
                encoding: "utf-8".to_string(),
            },
        },
        lineage: Lineage::default(),
        dependencies: Dependencies::default(),
        compliance: Compliance::default(),
        audit_trail: vec![AuditEntry {
            timestamp,
            actor: "system".to_string(),
            action: "provenance_generated".to_string(),
            resource: fixture_path.to_string_lossy().into_owned(),
            details: serde_json::json!({ "result": "success" }),
        }],
    })
}
