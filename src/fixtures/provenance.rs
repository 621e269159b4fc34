//! Provenance command handler.

use anyhow::Context;
use chrono::{DateTime, Utc};
use fixture_provenance::ProvenanceStore;
use std::path::{Path, PathBuf};

/// Write a provenance document for every fixture under `base_dir`.
pub fn run_provenance(base_dir: &Path, now: DateTime<Utc>) -> anyhow::Result<Vec<PathBuf>> {
    let store = ProvenanceStore::new(base_dir);
    let written = store
        .generate_all(now)
        .with_context(|| format!("Failed to generate provenance under {base_dir:?}"))?;

    tracing::info!(
        "Wrote {} provenance documents to {:?}",
        written.len(),
        store.provenance_dir()
    );
    Ok(written)
}
