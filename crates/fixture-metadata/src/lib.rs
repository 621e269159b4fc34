//! Content hashing and metadata stamping for generated datasets.
//!
//! A dataset is hashed over its canonical form: compact JSON with the keys
//! of every object sorted. Two datasets with the same structural content
//! hash identically whatever order their fields were inserted in, and a
//! dataset read back from disk hashes identically to the in-memory dataset
//! it was written from.
//!
//! ```rust
//! use fixture_core::{Object, Value};
//! use fixture_metadata::content_hash;
//!
//! let a: Object = [("x", Value::Integer(1)), ("y", Value::Null)].into_iter().collect();
//! let b: Object = [("y", Value::Null), ("x", Value::Integer(1))].into_iter().collect();
//! assert_eq!(content_hash(&[a][..]).unwrap(), content_hash(&[b][..]).unwrap());
//! ```

pub mod canonical;
pub mod error;
pub mod metadata;

pub use canonical::{canonical_bytes, content_hash, Canonicalize};
pub use error::MetadataError;
pub use metadata::{stamp, verify_records, GeneratorInfo, Metadata, GENERATOR_NAME, GENERATOR_VERSION};
