//! Classification enumerations for fixture generation.
//!
//! Every enumeration here has a fixed string spelling that is used on the
//! command line, in YAML configuration files, in output paths and in the
//! metadata document. Parsing an unknown spelling fails with
//! [`FixtureError`] instead of silently falling back to a default.

use crate::error::FixtureError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Field Types
// ============================================================================

/// The kind of a generated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    UnicodeString,
    Integer,
    Float,
    Boolean,
    Null,
    Object,
    Array,
}

impl FieldType {
    /// The palette drawn from when an object picks a type for each of its fields.
    ///
    /// Unicode strings are only produced on request, never by random object fields.
    pub const OBJECT_PALETTE: [FieldType; 7] = [
        FieldType::String,
        FieldType::Integer,
        FieldType::Float,
        FieldType::Boolean,
        FieldType::Null,
        FieldType::Object,
        FieldType::Array,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::UnicodeString => "unicode_string",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Boolean => "boolean",
            FieldType::Null => "null",
            FieldType::Object => "object",
            FieldType::Array => "array",
        }
    }
}

impl FromStr for FieldType {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" => Ok(FieldType::String),
            "unicode_string" | "unicode" => Ok(FieldType::UnicodeString),
            "integer" => Ok(FieldType::Integer),
            "float" => Ok(FieldType::Float),
            "boolean" => Ok(FieldType::Boolean),
            "null" => Ok(FieldType::Null),
            "object" => Ok(FieldType::Object),
            "array" => Ok(FieldType::Array),
            _ => Err(FixtureError::invalid("field type", s)),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Fixture Classification
// ============================================================================

/// Test data category. Selects the record shape of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Fixed edge-case corpus
    Unit,
    /// Records built from the requested field-type list
    #[default]
    Integration,
    /// Realistic log records
    Performance,
    /// Highly redundant records for compression testing
    Stress,
    /// Time series with monotonically increasing timestamps
    Conformance,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Unit,
        Category::Integration,
        Category::Performance,
        Category::Stress,
        Category::Conformance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Unit => "unit",
            Category::Integration => "integration",
            Category::Performance => "performance",
            Category::Stress => "stress",
            Category::Conformance => "conformance",
        }
    }
}

impl FromStr for Category {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FixtureError::invalid("category", s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size class. Maps to the default record count when none is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Small,
    #[default]
    Medium,
    Large,
    Xlarge,
}

impl SizeClass {
    pub const ALL: [SizeClass; 4] = [
        SizeClass::Small,
        SizeClass::Medium,
        SizeClass::Large,
        SizeClass::Xlarge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
            SizeClass::Xlarge => "xlarge",
        }
    }

    /// Number of records generated for this size class.
    pub fn default_count(&self) -> usize {
        match self {
            SizeClass::Small => 100,
            SizeClass::Medium => 1_000,
            SizeClass::Large => 10_000,
            SizeClass::Xlarge => 100_000,
        }
    }
}

impl FromStr for SizeClass {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SizeClass::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FixtureError::invalid("size class", s))
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Serialization Identifiers
// ============================================================================

/// Textual encoding of a dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// A single pretty-printed JSON array
    Json,
    /// Newline-delimited JSON
    #[default]
    Ndjson,
    /// Same encoding as `Ndjson`, different extension
    Jsonl,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Json, OutputFormat::Ndjson, OutputFormat::Jsonl];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Ndjson => "ndjson",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// File extension, without the leading dot.
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    /// Whether records are written one per line.
    pub fn is_line_delimited(&self) -> bool {
        matches!(self, OutputFormat::Ndjson | OutputFormat::Jsonl)
    }

    /// Find the format for a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        OutputFormat::ALL
            .into_iter()
            .find(|f| f.extension().eq_ignore_ascii_case(ext))
    }
}

impl FromStr for OutputFormat {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FixtureError::unsupported("format", s))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stream compression applied to a written data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionFormat {
    Gzip,
    Bzip2,
    Lzma,
}

impl CompressionFormat {
    pub const ALL: [CompressionFormat; 3] = [
        CompressionFormat::Gzip,
        CompressionFormat::Bzip2,
        CompressionFormat::Lzma,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompressionFormat::Gzip => "gzip",
            CompressionFormat::Bzip2 => "bzip2",
            CompressionFormat::Lzma => "lzma",
        }
    }

    /// Suffix appended to the data file name, without the leading dot.
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    /// Find the compression format for a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        CompressionFormat::ALL
            .into_iter()
            .find(|c| c.extension().eq_ignore_ascii_case(ext))
    }
}

impl FromStr for CompressionFormat {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompressionFormat::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FixtureError::unsupported("compression", s))
    }
}

impl fmt::Display for CompressionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_parse() {
        assert_eq!("string".parse::<FieldType>().unwrap(), FieldType::String);
        assert_eq!("Integer".parse::<FieldType>().unwrap(), FieldType::Integer);
        assert_eq!(
            "unicode_string".parse::<FieldType>().unwrap(),
            FieldType::UnicodeString
        );
        assert!(matches!(
            "decimal".parse::<FieldType>(),
            Err(FixtureError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_field_type_serde_spelling() {
        let json = serde_json::to_string(&FieldType::UnicodeString).unwrap();
        assert_eq!(json, "\"unicode_string\"");
        for t in FieldType::OBJECT_PALETTE {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
    }

    #[test]
    fn test_object_palette_excludes_unicode() {
        assert!(!FieldType::OBJECT_PALETTE.contains(&FieldType::UnicodeString));
        assert_eq!(FieldType::OBJECT_PALETTE.len(), 7);
    }

    #[test]
    fn test_category_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!("smoke".parse::<Category>().is_err());
    }

    #[test]
    fn test_size_class_counts() {
        assert_eq!(SizeClass::Small.default_count(), 100);
        assert_eq!(SizeClass::Medium.default_count(), 1_000);
        assert_eq!(SizeClass::Large.default_count(), 10_000);
        assert_eq!(SizeClass::Xlarge.default_count(), 100_000);
        assert_eq!("XLARGE".parse::<SizeClass>().unwrap(), SizeClass::Xlarge);
    }

    #[test]
    fn test_output_format_unsupported() {
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, FixtureError::UnsupportedFormat { kind: "format", .. }));
        assert_eq!(err.to_string(), "Unsupported format: xml");
    }

    #[test]
    fn test_ndjson_and_jsonl_are_line_delimited() {
        assert!(OutputFormat::Ndjson.is_line_delimited());
        assert!(OutputFormat::Jsonl.is_line_delimited());
        assert!(!OutputFormat::Json.is_line_delimited());
        assert_eq!(OutputFormat::from_extension("JSONL"), Some(OutputFormat::Jsonl));
        assert_eq!(OutputFormat::from_extension("txt"), None);
    }

    #[test]
    fn test_compression_format_parse() {
        assert_eq!("gzip".parse::<CompressionFormat>().unwrap(), CompressionFormat::Gzip);
        assert_eq!("bzip2".parse::<CompressionFormat>().unwrap(), CompressionFormat::Bzip2);
        assert_eq!("lzma".parse::<CompressionFormat>().unwrap(), CompressionFormat::Lzma);
        assert!(matches!(
            "zip".parse::<CompressionFormat>(),
            Err(FixtureError::UnsupportedFormat { kind: "compression", .. })
        ));
    }
}
