//! On-disk naming of fixture files.

use fixture_core::{Category, CompressionFormat, GenerationParameters, OutputFormat, SizeClass};
use std::path::{Path, PathBuf};

/// Every path a single generation run writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixturePaths {
    /// `<output_dir>/<category>/<size>`
    pub dir: PathBuf,
    pub data: PathBuf,
    pub metadata: PathBuf,
    /// Present when the run compresses its data file
    pub compressed: Option<PathBuf>,
}

impl FixturePaths {
    pub fn new(
        output_dir: impl AsRef<Path>,
        category: Category,
        size: SizeClass,
        count: usize,
        format: OutputFormat,
        compress: Option<CompressionFormat>,
    ) -> Self {
        let dir = output_dir
            .as_ref()
            .join(category.as_str())
            .join(size.as_str());
        let stem = format!("test_data_{category}_{size}_{count}");
        let data = dir.join(format!("{stem}.{}", format.extension()));
        let metadata = dir.join(format!("{stem}_metadata.json"));
        let compressed = compress.map(|c| compressed_path(&data, c));

        Self {
            dir,
            data,
            metadata,
            compressed,
        }
    }

    /// Paths for a run with the given parameters and final record count.
    pub fn for_run(params: &GenerationParameters, count: usize) -> Self {
        Self::new(
            &params.output_dir,
            params.category,
            params.size,
            count,
            params.format,
            params.compress,
        )
    }
}

/// `<data>.<compression extension>`
pub fn compressed_path(data: &Path, compression: CompressionFormat) -> PathBuf {
    let mut name = data.as_os_str().to_owned();
    name.push(".");
    name.push(compression.extension());
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let paths = FixturePaths::new(
            "testdata",
            Category::Integration,
            SizeClass::Small,
            100,
            OutputFormat::Ndjson,
            Some(CompressionFormat::Gzip),
        );

        assert_eq!(paths.dir, PathBuf::from("testdata/integration/small"));
        assert_eq!(
            paths.data,
            PathBuf::from("testdata/integration/small/test_data_integration_small_100.ndjson")
        );
        assert_eq!(
            paths.metadata,
            PathBuf::from("testdata/integration/small/test_data_integration_small_100_metadata.json")
        );
        assert_eq!(
            paths.compressed,
            Some(PathBuf::from(
                "testdata/integration/small/test_data_integration_small_100.ndjson.gzip"
            ))
        );
    }

    #[test]
    fn test_for_run_uses_params() {
        let params = GenerationParameters {
            category: Category::Unit,
            size: SizeClass::Xlarge,
            format: OutputFormat::Json,
            output_dir: "out".to_string(),
            ..Default::default()
        };
        let paths = FixturePaths::for_run(&params, 7);

        assert_eq!(
            paths.data,
            PathBuf::from("out/unit/xlarge/test_data_unit_xlarge_7.json")
        );
        assert!(paths.compressed.is_none());
    }

    #[test]
    fn test_compressed_path_appends_suffix() {
        let path = compressed_path(Path::new("a/b.jsonl"), CompressionFormat::Lzma);
        assert_eq!(path, PathBuf::from("a/b.jsonl.lzma"));
    }
}
