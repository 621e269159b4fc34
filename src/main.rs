//! Command-line interface for fixture-gen
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # Edge-case corpus (always seven records)
//! fixture-gen generate --category unit --size small
//!
//! # Log records as JSON Lines with an xz-compressed copy
//! fixture-gen generate --category performance --count 5000 --format jsonl --compress lzma
//!
//! # Parameters from a YAML file, seed overridden on the command line
//! fixture-gen generate --config fixtures.yaml --seed 7
//! ```
//!
//! ## Verify
//! ```bash
//! fixture-gen verify --data testdata/unit/small/test_data_unit_small_7.ndjson
//! ```
//!
//! ## Provenance
//! ```bash
//! fixture-gen provenance --base-dir testdata
//! fixture-gen validate --base-dir testdata
//! ```

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use fixture_core::DEFAULT_OUTPUT_DIR;
use fixture_generator::SystemClock;
use fixture_output::GenerateArgs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fixture-gen")]
#[command(about = "Deterministic synthetic test fixture generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a dataset with its metadata file
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Check a data file against the hash in its metadata file
    Verify {
        /// Data file, optionally with a compression suffix
        #[arg(long)]
        data: PathBuf,

        /// Metadata file (default: the one written next to the data file)
        #[arg(long)]
        metadata: Option<PathBuf>,
    },

    /// Write provenance documents for every fixture under a directory
    Provenance {
        /// Output root to scan
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR, env = "FIXTURE_OUTPUT_DIR")]
        base_dir: PathBuf,
    },

    /// Validate the provenance documents under a directory
    Validate {
        /// Output root whose metadata/provenance directory is validated
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR, env = "FIXTURE_OUTPUT_DIR")]
        base_dir: PathBuf,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => {
            let params = args
                .to_parameters()
                .context("Invalid generation parameters")?;
            let summary = fixture_gen::run_generate(&params, SystemClock)?;

            println!("Generated {} records", summary.metadata.record_count);
            println!("Data saved to: {}", summary.paths.data.display());
            if let Some(compressed) = &summary.paths.compressed {
                println!("Compressed data saved to: {}", compressed.display());
            }
            println!("Metadata saved to: {}", summary.paths.metadata.display());
            println!("Data hash: {}", summary.metadata.data_hash);
        }
        Commands::Verify { data, metadata } => {
            let hash = fixture_gen::run_verify(&data, metadata.as_deref())?;
            println!("Verified {}: {}", data.display(), hash);
        }
        Commands::Provenance { base_dir } => {
            let written = fixture_gen::run_provenance(&base_dir, Utc::now())?;
            for path in &written {
                println!("Generated provenance: {}", path.display());
            }
            println!("Provenance generation completed ({} files)", written.len());
        }
        Commands::Validate { base_dir } => {
            let batch = fixture_gen::run_validate(&base_dir)?;
            for (path, result) in &batch.results {
                match result {
                    Ok(report) => {
                        println!("{}: valid", path.display());
                        if !report.warnings.is_empty() {
                            println!("  warnings: {}", report.warnings.join(", "));
                        }
                    }
                    Err(e) => println!("{}: invalid ({e})", path.display()),
                }
            }

            if !batch.is_valid() {
                anyhow::bail!(
                    "{} of {} provenance documents are invalid",
                    batch.invalid_count(),
                    batch.results.len()
                );
            }
            println!("Provenance validation completed");
        }
    }

    Ok(())
}
