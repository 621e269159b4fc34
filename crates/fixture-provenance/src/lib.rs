//! Provenance bookkeeping for a tree of generated fixtures.
//!
//! The store walks an output tree, writes one provenance document per data
//! file under `<base_dir>/metadata/provenance/`, and the validator checks
//! those documents for the required top-level sections.

pub mod document;
pub mod error;
pub mod store;
pub mod validator;

pub use document::{build_document, extract_tags, fixture_id, ProvenanceDocument};
pub use error::ProvenanceError;
pub use store::{ProvenanceStore, PROVENANCE_SUFFIX};
pub use validator::{validate_document, validate_file, BatchReport, ValidationChecks, ValidationReport};
