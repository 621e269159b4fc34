//! Compressed copies of written data files.

use crate::error::OutputError;
use crate::paths::compressed_path;
use fixture_core::CompressionFormat;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// xz preset used for `lzma` output.
const XZ_PRESET: u32 = 6;

/// Write `<input>.<compression>` next to `input`, keeping the original.
///
/// `lzma` produces the xz container.
pub fn compress_file(input: &Path, compression: CompressionFormat) -> Result<PathBuf, OutputError> {
    let output = compressed_path(input, compression);
    let mut reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(&output)?);

    let mut writer = match compression {
        CompressionFormat::Gzip => {
            let mut encoder = flate2::write::GzEncoder::new(writer, flate2::Compression::default());
            io::copy(&mut reader, &mut encoder)?;
            encoder.finish()?
        }
        CompressionFormat::Bzip2 => {
            let mut encoder = bzip2::write::BzEncoder::new(writer, bzip2::Compression::default());
            io::copy(&mut reader, &mut encoder)?;
            encoder.finish()?
        }
        CompressionFormat::Lzma => {
            let mut encoder = xz2::write::XzEncoder::new(writer, XZ_PRESET);
            io::copy(&mut reader, &mut encoder)?;
            encoder.finish()?
        }
    };
    writer.flush()?;

    info!(
        "Compressed '{}' with {} to '{}' ({} bytes)",
        input.display(),
        compression,
        output.display(),
        std::fs::metadata(&output)?.len()
    );
    Ok(output)
}
