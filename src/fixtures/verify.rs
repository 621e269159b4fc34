//! Verify command handler.

use anyhow::Context;
use fixture_metadata::{verify_records, Metadata};
use fixture_output::{detect_encoding, read_records};
use std::path::{Path, PathBuf};

/// The metadata file written next to a data file.
///
/// `dir/x.ndjson` and `dir/x.ndjson.gzip` both map to `dir/x_metadata.json`.
pub fn metadata_path_for(data: &Path) -> anyhow::Result<PathBuf> {
    let (_, compression) = detect_encoding(data)?;
    let mut base = data.to_path_buf();
    if compression.is_some() {
        base.set_extension("");
    }

    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .with_context(|| format!("No file name in {data:?}"))?;
    Ok(data.with_file_name(format!("{stem}_metadata.json")))
}

/// Re-hash a data file and compare with its metadata.
///
/// Returns the verified hash.
pub fn run_verify(data: &Path, metadata: Option<&Path>) -> anyhow::Result<String> {
    let metadata_path = match metadata {
        Some(path) => path.to_path_buf(),
        None => metadata_path_for(data)?,
    };

    let metadata = Metadata::from_file(&metadata_path)
        .with_context(|| format!("Failed to load metadata from {metadata_path:?}"))?;
    let records =
        read_records(data).with_context(|| format!("Failed to read records from {data:?}"))?;

    tracing::info!(
        "Verifying {} records from {:?} against {:?}",
        records.len(),
        data,
        metadata_path
    );

    let hash = verify_records(&records, &metadata)
        .with_context(|| format!("Verification of {data:?} failed"))?;
    Ok(hash)
}
