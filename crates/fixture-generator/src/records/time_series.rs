//! Time-series records.

use super::TIME_SERIES_LEVELS;
use crate::clock::format_timestamp;
use crate::generators::{generate_float, generate_string};
use crate::rng::RngContext;
use chrono::{DateTime, Duration, Utc};
use fixture_core::{Record, Value};
use std::ops::RangeInclusive;

/// Categories assigned to time-series points.
pub const CATEGORIES: [&str; 4] = ["A", "B", "C", "D"];

/// Seconds between consecutive points.
pub const STEP_SECONDS: RangeInclusive<i64> = 1..=3600;

/// Length range of the `message` field.
pub const MESSAGE_LENGTH: RangeInclusive<usize> = 10..=100;

/// Generate `count` time-series records starting at `start_time`.
///
/// Each record's timestamp is later than the previous one by a random step
/// in [`STEP_SECONDS`].
pub fn generate_time_series(
    rng: &mut RngContext,
    count: usize,
    start_time: DateTime<Utc>,
) -> Vec<Record> {
    let mut records = Vec::with_capacity(count);
    let mut current = start_time;

    for _ in 0..count {
        let value = generate_float(rng);
        let category = rng.choose(&CATEGORIES);
        let level = rng.choose(&TIME_SERIES_LEVELS);
        let message_length = rng.int_in(MESSAGE_LENGTH);
        let message = generate_string(rng, message_length);

        let record: Record = [
            ("timestamp", Value::String(format_timestamp(&current))),
            ("value", Value::Float(value)),
            ("category", Value::String(category.to_string())),
            ("level", Value::String(level.to_string())),
            ("message", Value::String(message)),
        ]
        .into_iter()
        .collect();
        records.push(record);

        current += Duration::seconds(rng.int_in(STEP_SECONDS));
    }

    records
}
