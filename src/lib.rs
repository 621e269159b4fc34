//! fixture-gen library
//!
//! Deterministic, seeded synthetic datasets for parser and format test
//! suites. Every dataset is written with a metadata file carrying the seed,
//! the full generation parameters and a SHA-256 content hash, so a consumer
//! can verify that a fixture was produced by a given parameter set.
//!
//! # CLI Usage
//!
//! ```bash
//! # 1000 integration records as NDJSON, plus a gzip copy
//! fixture-gen generate --category integration --size medium --compress gzip
//!
//! # Re-hash a written fixture against its metadata
//! fixture-gen verify --data testdata/integration/medium/test_data_integration_medium_1000.ndjson.gzip
//!
//! # Provenance documents for every fixture, then validate them
//! fixture-gen provenance --base-dir testdata
//! fixture-gen validate --base-dir testdata
//! ```

pub mod fixtures;

pub use fixtures::generate::{run_generate, GenerateSummary};
pub use fixtures::provenance::run_provenance;
pub use fixtures::validate::run_validate;
pub use fixtures::verify::{metadata_path_for, run_verify};
