//! Record assemblers.
//!
//! One module per record shape. Every assembler takes the run's
//! [`RngContext`](crate::RngContext) by mutable reference and draws from it
//! in a fixed order, so the records it returns depend only on the RNG state
//! (and, for the shapes that stamp the current time, on the clock).

pub mod compression;
pub mod edge_case;
pub mod explicit;
pub mod log;
pub mod time_series;

pub use compression::generate_compression_records;
pub use edge_case::{generate_edge_case_records, EDGE_CASE_RECORD_COUNT};
pub use explicit::generate_record;
pub use log::generate_log_records;
pub use time_series::generate_time_series;

/// Levels used by time-series records.
pub const TIME_SERIES_LEVELS: [&str; 4] = ["DEBUG", "INFO", "WARN", "ERROR"];

/// Levels used by log records.
pub const LOG_LEVELS: [&str; 5] = ["DEBUG", "INFO", "WARN", "ERROR", "FATAL"];
