//! Dataset serializer.

use crate::error::OutputError;
use fixture_core::{OutputFormat, Record};
use fixture_metadata::Metadata;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for fixture writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Number of records written.
    pub records_written: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl WriteMetrics {
    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.records_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Serialize records into any writer.
///
/// `json` writes one pretty-printed array, `ndjson` and `jsonl` write one
/// compact record per `\n`-terminated line. Returns the number of records
/// written.
pub fn write_records_to<W: Write>(
    records: &[Record],
    writer: &mut W,
    format: OutputFormat,
) -> Result<u64, OutputError> {
    if !format.is_line_delimited() {
        serde_json::to_writer_pretty(&mut *writer, records)?;
        return Ok(records.len() as u64);
    }

    let mut written = 0u64;
    for record in records {
        serde_json::to_writer(&mut *writer, record)?;
        writeln!(writer)?;
        written += 1;

        if written % 10000 == 0 {
            debug!("Written {} records", written);
        }
    }
    Ok(written)
}

/// Write records to a file, creating parent directories as needed.
pub fn write_records(
    records: &[Record],
    output_path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<WriteMetrics, OutputError> {
    let start_time = Instant::now();
    let output_path = output_path.as_ref();
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    info!(
        "Writing {} records to '{}' as {}",
        records.len(),
        output_path.display(),
        format
    );

    let file = File::create(output_path)?;
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    let records_written = write_records_to(records, &mut writer, format)?;
    writer.flush()?;
    drop(writer);

    let metrics = WriteMetrics {
        records_written,
        file_size_bytes: fs::metadata(output_path)?.len(),
        total_duration: start_time.elapsed(),
    };

    info!(
        "Data written: {} records, {} bytes in {:?} ({:.2} records/sec)",
        metrics.records_written,
        metrics.file_size_bytes,
        metrics.total_duration,
        metrics.records_per_second()
    );

    Ok(metrics)
}

/// Write a metadata file as pretty JSON.
pub fn write_metadata(metadata: &Metadata, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, metadata)?;
    writer.flush()?;

    info!("Metadata written to '{}'", output_path.display());
    Ok(())
}
