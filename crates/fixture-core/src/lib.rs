//! Core types for the fixture-gen framework.
//!
//! This crate provides the foundational types shared by the generator,
//! the metadata stamper, the serializer and the provenance tooling:
//!
//! - [`Value`] / [`Object`] - Generated values with insertion-ordered objects
//! - [`FieldType`] - The fixed palette of value kinds
//! - [`Category`] / [`SizeClass`] - Fixture classification enumerations
//! - [`OutputFormat`] / [`CompressionFormat`] - Serialization identifiers
//! - [`GenerationParameters`] - Everything that determines a generation run
//!
//! # Architecture
//!
//! ```text
//! fixture-core (this crate)
//!    │
//!    ├─── fixture-generator   (builds Datasets of Values)
//!    ├─── fixture-metadata    (canonical hash + metadata stamping)
//!    ├─── fixture-output      (json / ndjson writers, compression)
//!    └─── fixture-provenance  (provenance records + validation)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{Category, GenerationParameters, SizeClass};
//!
//! let params = GenerationParameters {
//!     category: Category::Conformance,
//!     size: SizeClass::Small,
//!     ..GenerationParameters::default()
//! };
//! assert_eq!(params.record_count(), 100);
//! ```

pub mod error;
pub mod params;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use error::FixtureError;
pub use params::{
    parse_start_time, GenerationParameters, SizePalette, DEFAULT_OUTPUT_DIR, DEFAULT_SEED,
    DEFAULT_VERSION,
};
pub use types::{Category, CompressionFormat, FieldType, OutputFormat, SizeClass};
pub use values::{Dataset, Object, Record, Value};
