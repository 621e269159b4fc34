//! CLI argument definitions for dataset generation.
//!
//! Precedence per parameter: command-line flag, then environment variable,
//! then the `--config` YAML file, then the built-in default.

use chrono::{DateTime, Utc};
use clap::Args;
use fixture_core::{
    parse_start_time, Category, CompressionFormat, FieldType, FixtureError, GenerationParameters,
    OutputFormat, SizeClass,
};
use std::path::PathBuf;

/// Arguments of the `generate` command.
#[derive(Args, Clone, Debug, Default)]
pub struct GenerateArgs {
    /// YAML file with generation parameters
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, env = "FIXTURE_SEED")]
    pub seed: Option<u64>,

    /// Dataset version recorded in the metadata
    #[arg(long = "data-version")]
    pub data_version: Option<String>,

    /// Test data category: unit, integration, performance, stress, conformance
    #[arg(long, env = "FIXTURE_CATEGORY")]
    pub category: Option<Category>,

    /// Size class: small, medium, large, xlarge
    #[arg(long, env = "FIXTURE_SIZE")]
    pub size: Option<SizeClass>,

    /// Number of records (overrides the size class default)
    #[arg(long)]
    pub count: Option<usize>,

    /// Field types for integration records (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub field_types: Vec<FieldType>,

    /// Output format: json, ndjson, jsonl
    #[arg(long, env = "FIXTURE_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Also write a compressed copy: gzip, bzip2, lzma
    #[arg(long, env = "FIXTURE_COMPRESS")]
    pub compress: Option<CompressionFormat>,

    /// First timestamp of conformance time series (RFC 3339)
    #[arg(long, value_parser = parse_start_time)]
    pub start_time: Option<DateTime<Utc>>,

    /// Output root directory
    #[arg(long, short = 'o', env = "FIXTURE_OUTPUT_DIR")]
    pub output_dir: Option<String>,
}

impl GenerateArgs {
    /// Resolve the final parameters of the run.
    pub fn to_parameters(&self) -> Result<GenerationParameters, FixtureError> {
        let mut params = match &self.config {
            Some(path) => GenerationParameters::from_file(path)?,
            None => GenerationParameters::default(),
        };

        if let Some(seed) = self.seed {
            params.seed = seed;
        }
        if let Some(version) = &self.data_version {
            params.version = version.clone();
        }
        if let Some(category) = self.category {
            params.category = category;
        }
        if let Some(size) = self.size {
            params.size = size;
        }
        if self.count.is_some() {
            params.count = self.count;
        }
        if !self.field_types.is_empty() {
            params.field_types = self.field_types.clone();
        }
        if let Some(format) = self.format {
            params.format = format;
        }
        if self.compress.is_some() {
            params.compress = self.compress;
        }
        if self.start_time.is_some() {
            params.start_time = self.start_time;
        }
        if let Some(dir) = &self.output_dir {
            params.output_dir = dir.clone();
        }

        params.validate()?;
        Ok(params)
    }
}
