//! Deterministic dataset generator for fixture-gen.
//!
//! This crate provides the [`DataGenerator`] which produces reproducible
//! synthetic datasets from [`GenerationParameters`]. Every random draw of a
//! run goes through one [`RngContext`] seeded from the parameters, in a
//! fixed call order, so the same seed and parameters always produce the
//! same dataset.
//!
//! # Architecture
//!
//! ```text
//! GenerationParameters
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │    DataGenerator     │
//! │                      │
//! │  - params            │
//! │  - rng (RngContext)  │──► generators::{string, numeric, composite}
//! │  - clock             │──► records::{explicit, time_series, log,
//! └──────────┬───────────┘             compression, edge_case}
//!            │
//!            ▼
//!     Dataset (Vec<Record>)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{FieldType, GenerationParameters};
//! use fixture_generator::DataGenerator;
//!
//! let params = GenerationParameters {
//!     count: Some(3),
//!     field_types: vec![FieldType::String, FieldType::Integer, FieldType::Boolean],
//!     ..GenerationParameters::default()
//! };
//!
//! let mut generator = DataGenerator::new(params).unwrap();
//! let dataset = generator.generate();
//! assert_eq!(dataset.len(), 3);
//! assert_eq!(dataset[0].keys().collect::<Vec<_>>(), vec!["field_0", "field_1", "field_2"]);
//! ```
//!
//! # Record shapes
//!
//! The category of the parameters selects the record shape:
//!
//! - `unit` - the fixed seven-record edge-case corpus
//! - `integration` - one field per requested field type, named `field_<i>`
//! - `performance` - log records
//! - `stress` - compression-friendly records sharing one large string and object
//! - `conformance` - a time series with increasing timestamps

pub mod clock;
pub mod generator;
pub mod generators;
pub mod records;
pub mod rng;

// Re-exports for convenience
pub use clock::{format_timestamp, Clock, FixedClock, SystemClock};
pub use generator::{DataGenerator, RecordIterator};
pub use rng::RngContext;

#[doc(no_inline)]
pub use fixture_core::GenerationParameters;
