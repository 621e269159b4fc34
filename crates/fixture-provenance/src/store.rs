//! Provenance documents on disk.

use crate::document::{build_document, ProvenanceDocument};
use crate::error::ProvenanceError;
use chrono::{DateTime, Utc};
use fixture_core::OutputFormat;
use fixture_metadata::Metadata;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File name suffix of provenance documents.
pub const PROVENANCE_SUFFIX: &str = "_provenance.json";

const METADATA_DIR: &str = "metadata";
const METADATA_SUFFIX: &str = "_metadata.json";

/// Provenance documents for the fixtures under one output root.
#[derive(Debug, Clone)]
pub struct ProvenanceStore {
    base_dir: PathBuf,
    provenance_dir: PathBuf,
}

impl ProvenanceStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let provenance_dir = base_dir.join(METADATA_DIR).join("provenance");
        Self {
            base_dir,
            provenance_dir,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// `<base_dir>/metadata/provenance`
    pub fn provenance_dir(&self) -> &Path {
        &self.provenance_dir
    }

    /// Data files under the base directory, sorted by path.
    ///
    /// Metadata files and everything under `<base_dir>/metadata` are skipped.
    pub fn discover_fixtures(&self) -> Result<Vec<PathBuf>, ProvenanceError> {
        let mut found = Vec::new();
        if self.base_dir.is_dir() {
            self.walk(&self.base_dir, &mut found)?;
        }
        found.sort();
        Ok(found)
    }

    fn walk(&self, dir: &Path, found: &mut Vec<PathBuf>) -> Result<(), ProvenanceError> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if entry.file_type()?.is_dir() {
                if path != self.base_dir.join(METADATA_DIR) {
                    self.walk(&path, found)?;
                }
            } else if is_data_file(&path) {
                found.push(path);
            }
        }
        Ok(())
    }

    /// Where the provenance document of a fixture is stored.
    ///
    /// The name keeps the fixture's extension: one run can write the same
    /// stem in several formats.
    pub fn document_path(&self, fixture_path: &Path) -> PathBuf {
        let name = fixture_path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.provenance_dir.join(format!("{name}{PROVENANCE_SUFFIX}"))
    }

    /// Write a document as pretty JSON and return its path.
    pub fn save(
        &self,
        document: &ProvenanceDocument,
        fixture_path: &Path,
    ) -> Result<PathBuf, ProvenanceError> {
        fs::create_dir_all(&self.provenance_dir)?;
        let path = self.document_path(fixture_path);

        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, document)?;
        writer.flush()?;

        debug!("Saved provenance for '{}' to '{}'", fixture_path.display(), path.display());
        Ok(path)
    }

    /// Build and save a document for every fixture under the base directory.
    pub fn generate_all(&self, now: DateTime<Utc>) -> Result<Vec<PathBuf>, ProvenanceError> {
        let fixtures = self.discover_fixtures()?;
        info!(
            "Generating provenance for {} fixtures under '{}'",
            fixtures.len(),
            self.base_dir.display()
        );

        let mut written = Vec::with_capacity(fixtures.len());
        for fixture in fixtures {
            let metadata = sibling_metadata(&fixture);
            let document = build_document(&fixture, metadata.as_ref(), now)?;
            written.push(self.save(&document, &fixture)?);
        }
        Ok(written)
    }

    /// Provenance documents currently in the store, sorted by path.
    pub fn documents(&self) -> Result<Vec<PathBuf>, ProvenanceError> {
        if !self.provenance_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut docs = Vec::new();
        for entry in fs::read_dir(&self.provenance_dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            if name.ends_with(PROVENANCE_SUFFIX) && entry.file_type()?.is_file() {
                docs.push(entry.path());
            }
        }
        docs.sort();
        Ok(docs)
    }
}

fn is_data_file(path: &Path) -> bool {
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name,
        None => return false,
    };
    if name.ends_with(METADATA_SUFFIX) {
        return false;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(OutputFormat::from_extension)
        .is_some()
}

/// The metadata file written next to a data file, if it exists and parses.
fn sibling_metadata(fixture_path: &Path) -> Option<Metadata> {
    let stem = fixture_path.file_stem()?.to_string_lossy().into_owned();
    let path = fixture_path.with_file_name(format!("{stem}{METADATA_SUFFIX}"));
    if !path.is_file() {
        return None;
    }

    match Metadata::from_file(&path) {
        Ok(metadata) => Some(metadata),
        Err(e) => {
            warn!("Ignoring unreadable metadata '{}': {}", path.display(), e);
            None
        }
    }
}
