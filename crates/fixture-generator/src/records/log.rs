//! Log records.

use super::LOG_LEVELS;
use crate::clock::{format_timestamp, Clock};
use crate::generators::generate_string;
use crate::rng::RngContext;
use fixture_core::{Record, Value};
use std::ops::RangeInclusive;

/// Logger name suffixes; loggers are named `com.example.<suffix>`.
pub const LOGGER_COMPONENTS: [&str; 3] = ["service", "controller", "repository"];

/// Length range of the `message` field.
pub const MESSAGE_LENGTH: RangeInclusive<usize> = 20..=200;

/// Length of the `session_id` field.
pub const SESSION_ID_LENGTH: usize = 32;

/// Length of the `request_id` field.
pub const REQUEST_ID_LENGTH: usize = 16;

/// Generate `count` log records stamped with the clock's current time.
pub fn generate_log_records(rng: &mut RngContext, count: usize, clock: &dyn Clock) -> Vec<Record> {
    let mut records = Vec::with_capacity(count);

    for _ in 0..count {
        let timestamp = format_timestamp(&clock.now());
        let level = rng.choose(&LOG_LEVELS);
        let logger = format!("com.example.{}", rng.choose(&LOGGER_COMPONENTS));
        let message_length = rng.int_in(MESSAGE_LENGTH);
        let message = generate_string(rng, message_length);
        let thread = format!("thread-{}", rng.int_in(1..=10));
        let user_id = rng.int_in(1i64..=10_000);
        let session_id = generate_string(rng, SESSION_ID_LENGTH);
        let request_id = generate_string(rng, REQUEST_ID_LENGTH);
        let duration_ms = rng.int_in(1i64..=5_000);
        let memory_mb = rng.int_in(100i64..=10_000);

        let record: Record = [
            ("timestamp", Value::String(timestamp)),
            ("level", Value::String(level.to_string())),
            ("logger", Value::String(logger)),
            ("message", Value::String(message)),
            ("thread", Value::String(thread)),
            ("user_id", Value::Integer(user_id)),
            ("session_id", Value::String(session_id)),
            ("request_id", Value::String(request_id)),
            ("duration_ms", Value::Integer(duration_ms)),
            ("memory_mb", Value::Integer(memory_mb)),
        ]
        .into_iter()
        .collect();
        records.push(record);
    }

    records
}
