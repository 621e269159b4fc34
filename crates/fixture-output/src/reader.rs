//! Reading fixture files back.
//!
//! The encoding is taken from the file name: an optional compression suffix
//! (`.gzip`, `.bzip2`, `.lzma`) after the format extension.

use crate::error::OutputError;
use fixture_core::{CompressionFormat, OutputFormat};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Infer format and compression from a fixture file name.
pub fn detect_encoding(path: &Path) -> Result<(OutputFormat, Option<CompressionFormat>), OutputError> {
    let unknown = || OutputError::UnknownExtension(path.to_path_buf());
    let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(unknown)?;

    if let Some(format) = OutputFormat::from_extension(ext) {
        return Ok((format, None));
    }

    let compression = CompressionFormat::from_extension(ext).ok_or_else(unknown)?;
    let inner = path
        .file_stem()
        .map(Path::new)
        .and_then(|stem| stem.extension())
        .and_then(|e| e.to_str())
        .and_then(OutputFormat::from_extension)
        .ok_or_else(unknown)?;
    Ok((inner, Some(compression)))
}

/// Read every record of a fixture file.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<serde_json::Value>, OutputError> {
    let path = path.as_ref();
    let (format, compression) = detect_encoding(path)?;
    debug!(
        "Reading '{}' as {}{}",
        path.display(),
        format,
        compression.map(|c| format!(" ({c})")).unwrap_or_default()
    );

    let file = File::open(path)?;
    let raw: Box<dyn Read> = match compression {
        None => Box::new(file),
        Some(CompressionFormat::Gzip) => Box::new(flate2::read::MultiGzDecoder::new(file)),
        Some(CompressionFormat::Bzip2) => Box::new(bzip2::read::MultiBzDecoder::new(file)),
        Some(CompressionFormat::Lzma) => Box::new(xz2::read::XzDecoder::new_multi_decoder(file)),
    };
    let reader = BufReader::new(raw);

    if !format.is_line_delimited() {
        return Ok(serde_json::from_reader(reader)?);
    }

    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }
    Ok(records)
}
