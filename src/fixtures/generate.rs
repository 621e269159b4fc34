//! Generate command handler.

use anyhow::Context;
use fixture_core::GenerationParameters;
use fixture_generator::{Clock, DataGenerator};
use fixture_metadata::{stamp, Metadata};
use fixture_output::{compress_file, write_metadata, write_records, FixturePaths, WriteMetrics};

/// What a generate run wrote.
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    pub paths: FixturePaths,
    pub metadata: Metadata,
    pub metrics: WriteMetrics,
}

/// Generate one dataset and write its data, compressed copy and metadata.
pub fn run_generate(
    params: &GenerationParameters,
    clock: impl Clock + Clone + 'static,
) -> anyhow::Result<GenerateSummary> {
    let dataset = DataGenerator::new(params.clone())
        .context("Invalid generation parameters")?
        .with_clock(clock.clone())
        .generate();

    let paths = FixturePaths::for_run(params, dataset.len());
    let metrics = write_records(&dataset, &paths.data, params.format)
        .with_context(|| format!("Failed to write data file {:?}", paths.data))?;

    if let Some(compression) = params.compress {
        compress_file(&paths.data, compression)
            .with_context(|| format!("Failed to compress {:?} with {compression}", paths.data))?;
    }

    let metadata = stamp(&dataset, params, clock.now()).context("Failed to hash dataset")?;
    write_metadata(&metadata, &paths.metadata)
        .with_context(|| format!("Failed to write metadata file {:?}", paths.metadata))?;

    tracing::info!(
        "Generated {} {} records with hash {}",
        metadata.record_count,
        params.category,
        metadata.data_hash
    );

    Ok(GenerateSummary {
        paths,
        metadata,
        metrics,
    })
}
