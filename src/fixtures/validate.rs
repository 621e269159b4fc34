//! Validate command handler.

use anyhow::Context;
use fixture_provenance::{BatchReport, ProvenanceStore};
use std::path::Path;

/// Validate every provenance document under `base_dir`.
///
/// Individual invalid documents do not stop the batch; they are reported
/// in the returned [`BatchReport`].
pub fn run_validate(base_dir: &Path) -> anyhow::Result<BatchReport> {
    let store = ProvenanceStore::new(base_dir);
    let documents = store
        .documents()
        .with_context(|| format!("Failed to list {:?}", store.provenance_dir()))?;

    tracing::info!("Validating {} provenance documents", documents.len());
    Ok(BatchReport::validate_all(documents))
}
