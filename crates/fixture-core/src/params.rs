//! Generation parameters.
//!
//! `GenerationParameters` is the single input of a generation run. It can be
//! built from CLI flags or loaded from a YAML file:
//!
//! ```yaml
//! seed: 7
//! category: integration
//! size: small
//! field_types: [string, integer, object]
//! format: ndjson
//! compress: gzip
//! palette:
//!   string_lengths: [1, 10, 100]
//!   array_sizes: [1, 10]
//! ```
//!
//! Keys that are absent take their defaults.

use crate::error::FixtureError;
use crate::types::{Category, CompressionFormat, FieldType, OutputFormat, SizeClass};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default seed when none is configured.
pub const DEFAULT_SEED: u64 = 42;

/// Default dataset version string.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "testdata";

/// Discrete size palettes the composite generators draw from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizePalette {
    /// Lengths for string values inside records, objects and arrays
    pub string_lengths: Vec<usize>,

    /// Sizes for array-typed fields
    pub array_sizes: Vec<usize>,
}

impl Default for SizePalette {
    fn default() -> Self {
        Self {
            string_lengths: vec![1, 10, 100, 1_000, 10_000, 100_000],
            array_sizes: vec![1, 10, 100, 1_000, 10_000],
        }
    }
}

impl SizePalette {
    /// Check that both palettes have at least one entry.
    pub fn validate(&self) -> Result<(), FixtureError> {
        if self.string_lengths.is_empty() {
            return Err(FixtureError::invalid("palette", "string_lengths is empty"));
        }
        if self.array_sizes.is_empty() {
            return Err(FixtureError::invalid("palette", "array_sizes is empty"));
        }
        Ok(())
    }
}

/// Everything that determines the content of a generated dataset.
///
/// Two runs with equal parameters (and an equal clock for the categories
/// that stamp the current time) produce identical datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParameters {
    /// Seed for the single RNG stream of the run
    pub seed: u64,

    /// Dataset version recorded in the metadata
    pub version: String,

    /// Test data category (selects the record shape)
    pub category: Category,

    /// Size class (selects the default record count)
    pub size: SizeClass,

    /// Explicit record count, overriding the size class
    pub count: Option<usize>,

    /// Field types for explicit (integration) records
    pub field_types: Vec<FieldType>,

    /// Output encoding
    pub format: OutputFormat,

    /// Optional compression of the written data file
    pub compress: Option<CompressionFormat>,

    /// First timestamp of a time series; the clock's current time when absent
    pub start_time: Option<DateTime<Utc>>,

    /// Output root directory
    pub output_dir: String,

    /// Size palettes for composite values
    pub palette: SizePalette,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            version: DEFAULT_VERSION.to_string(),
            category: Category::default(),
            size: SizeClass::default(),
            count: None,
            field_types: FieldType::OBJECT_PALETTE.to_vec(),
            format: OutputFormat::default(),
            compress: None,
            start_time: None,
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            palette: SizePalette::default(),
        }
    }
}

impl GenerationParameters {
    /// Load parameters from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FixtureError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse parameters from a YAML string.
    ///
    /// An unknown `format` or `compress` value is `UnsupportedFormat`, the
    /// same as on the command line.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        check_format_identifiers(&serde_yaml::from_str(yaml)?)?;
        let params: GenerationParameters = serde_yaml::from_str(yaml)?;
        params.validate()?;
        Ok(params)
    }

    /// Number of records to generate: the explicit count, else the size class default.
    pub fn record_count(&self) -> usize {
        self.count.unwrap_or_else(|| self.size.default_count())
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), FixtureError> {
        self.palette.validate()
    }
}

/// Parse the `format` and `compress` strings of a raw YAML document.
fn check_format_identifiers(raw: &serde_yaml::Value) -> Result<(), FixtureError> {
    if let Some(format) = raw.get("format").and_then(serde_yaml::Value::as_str) {
        format.parse::<OutputFormat>()?;
    }
    if let Some(compress) = raw.get("compress").and_then(serde_yaml::Value::as_str) {
        compress.parse::<CompressionFormat>()?;
    }
    Ok(())
}

/// Parse an RFC 3339 timestamp given as a parameter.
pub fn parse_start_time(s: &str) -> Result<DateTime<Utc>, FixtureError> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| FixtureError::invalid("start time", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = GenerationParameters::default();
        assert_eq!(params.seed, 42);
        assert_eq!(params.version, "1.0.0");
        assert_eq!(params.category, Category::Integration);
        assert_eq!(params.size, SizeClass::Medium);
        assert_eq!(params.format, OutputFormat::Ndjson);
        assert_eq!(params.compress, None);
        assert_eq!(params.field_types.len(), 7);
        assert_eq!(params.record_count(), 1_000);
    }

    #[test]
    fn test_explicit_count_overrides_size() {
        let params = GenerationParameters {
            size: SizeClass::Xlarge,
            count: Some(0),
            ..GenerationParameters::default()
        };
        assert_eq!(params.record_count(), 0);
    }

    #[test]
    fn test_from_yaml_partial() {
        let yaml = r#"
seed: 7
category: conformance
size: small
field_types: [string, unicode_string]
compress: lzma
start_time: "2024-01-01T00:00:00Z"
palette:
  string_lengths: [3]
"#;
        let params = GenerationParameters::from_yaml(yaml).unwrap();
        assert_eq!(params.seed, 7);
        assert_eq!(params.category, Category::Conformance);
        assert_eq!(params.record_count(), 100);
        assert_eq!(
            params.field_types,
            vec![FieldType::String, FieldType::UnicodeString]
        );
        assert_eq!(params.compress, Some(CompressionFormat::Lzma));
        assert_eq!(params.palette.string_lengths, vec![3]);
        // Missing palette keys keep their defaults
        assert_eq!(params.palette.array_sizes, SizePalette::default().array_sizes);
        assert_eq!(params.version, "1.0.0");
        assert!(params.start_time.is_some());
    }

    #[test]
    fn test_from_yaml_unknown_format() {
        let result = GenerationParameters::from_yaml("format: xml\n");
        assert!(matches!(
            result,
            Err(FixtureError::UnsupportedFormat { kind: "format", ref value }) if value == "xml"
        ));
    }

    #[test]
    fn test_from_yaml_unknown_compression() {
        let result = GenerationParameters::from_yaml("format: jsonl\ncompress: zstd\n");
        assert!(matches!(
            result,
            Err(FixtureError::UnsupportedFormat { kind: "compression", .. })
        ));
    }

    #[test]
    fn test_from_yaml_empty_and_null_compress() {
        assert_eq!(
            GenerationParameters::from_yaml("compress: null\n").unwrap().compress,
            None
        );
        assert_eq!(
            GenerationParameters::from_yaml("seed: 1\n").unwrap().format,
            OutputFormat::Ndjson
        );
    }

    #[test]
    fn test_from_yaml_empty_palette() {
        let yaml = "palette:\n  array_sizes: []\n";
        assert!(matches!(
            GenerationParameters::from_yaml(yaml),
            Err(FixtureError::InvalidParameter { name: "palette", .. })
        ));
    }

    #[test]
    fn test_parameters_serialize_for_metadata() {
        let params = GenerationParameters::default();
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["seed"], 42);
        assert_eq!(json["category"], "integration");
        assert_eq!(json["format"], "ndjson");
        assert_eq!(json["compress"], serde_json::Value::Null);
        assert_eq!(json["field_types"][0], "string");
    }

    #[test]
    fn test_parse_start_time() {
        let dt = parse_start_time("2024-03-01T12:00:00+02:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-03-01T10:00:00+00:00");
        assert!(parse_start_time("yesterday").is_err());
    }
}
