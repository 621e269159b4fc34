//! Main data generator for producing datasets.

use crate::clock::{Clock, SystemClock};
use crate::records::{
    generate_compression_records, generate_edge_case_records, generate_log_records,
    generate_record, generate_time_series,
};
use crate::rng::RngContext;
use fixture_core::{Category, Dataset, FixtureError, GenerationParameters, Record};
use tracing::{debug, info};

/// Data generator that produces deterministic datasets.
///
/// The generator owns the single [`RngContext`] of a run, seeded from the
/// parameters. A fresh generator built from equal parameters (and an equal
/// clock) produces an identical dataset.
pub struct DataGenerator {
    /// Parameters of the run
    params: GenerationParameters,
    /// Seeded random source shared by all generators
    rng: RngContext,
    /// Time source for records that stamp the current time
    clock: Box<dyn Clock>,
    /// Number of records produced so far
    index: u64,
}

impl DataGenerator {
    /// Create a new data generator reading the wall clock.
    ///
    /// Fails with `InvalidParameter` if the parameters do not validate,
    /// e.g. an empty size palette.
    pub fn new(params: GenerationParameters) -> Result<Self, FixtureError> {
        params.validate()?;
        let rng = RngContext::new(params.seed);
        Ok(Self {
            params,
            rng,
            clock: Box::new(SystemClock),
            index: 0,
        })
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Get a reference to the parameters.
    pub fn params(&self) -> &GenerationParameters {
        &self.params
    }

    /// Number of records produced so far.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the full dataset selected by the parameters' category.
    ///
    /// The edge-case corpus of the `unit` category always has seven records
    /// and ignores the requested count.
    pub fn generate(&mut self) -> Dataset {
        let count = self.params.record_count();
        info!(
            "Generating {} dataset: {} records (seed={})",
            self.params.category,
            count,
            self.params.seed
        );

        let dataset = match self.params.category {
            Category::Unit => {
                if self.params.count.is_some() {
                    debug!("Edge-case corpus has a fixed size; ignoring count {}", count);
                }
                generate_edge_case_records(&mut self.rng, &self.params.palette)
            }
            Category::Integration => self.records(count).collect(),
            Category::Performance => {
                generate_log_records(&mut self.rng, count, self.clock.as_ref())
            }
            Category::Stress => generate_compression_records(
                &mut self.rng,
                count,
                self.clock.as_ref(),
                &self.params.palette,
            ),
            Category::Conformance => {
                let start_time = self.params.start_time.unwrap_or_else(|| self.clock.now());
                generate_time_series(&mut self.rng, count, start_time)
            }
        };

        self.index += dataset.len() as u64;
        info!("Generated {} records", dataset.len());
        dataset
    }

    /// Generate the next explicit field-type record.
    pub fn next_record(&mut self) -> Record {
        let record = generate_record(
            &mut self.rng,
            &self.params.field_types,
            &self.params.palette,
        );
        self.index += 1;

        if self.index % 10_000 == 0 {
            debug!("Generated {} records", self.index);
        }

        record
    }

    /// Generate multiple explicit field-type records.
    ///
    /// Returns an iterator that lazily generates records.
    pub fn records(&mut self, count: usize) -> RecordIterator<'_> {
        RecordIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates explicit field-type records.
pub struct RecordIterator<'a> {
    generator: &'a mut DataGenerator,
    remaining: usize,
}

impl Iterator for RecordIterator<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}
