//! Writing generated datasets to disk and reading them back.
//!
//! A run writes into `<output_dir>/<category>/<size>/`:
//!
//! ```text
//! test_data_<category>_<size>_<count>.<format>              data
//! test_data_<category>_<size>_<count>.<format>.<compress>   optional compressed copy
//! test_data_<category>_<size>_<count>_metadata.json         metadata
//! ```
//!
//! # Example
//!
//! ```ignore
//! use fixture_output::{write_records, read_records, FixturePaths};
//!
//! let paths = FixturePaths::for_run(&params, dataset.len());
//! let metrics = write_records(&dataset, &paths.data, params.format)?;
//! let back = read_records(&paths.data)?;
//! ```

pub mod args;
pub mod compress;
pub mod error;
pub mod paths;
pub mod reader;
pub mod writer;

pub use args::GenerateArgs;
pub use compress::compress_file;
pub use error::OutputError;
pub use paths::{compressed_path, FixturePaths};
pub use reader::{detect_encoding, read_records};
pub use writer::{write_metadata, write_records, write_records_to, WriteMetrics, DEFAULT_BUFFER_SIZE};
