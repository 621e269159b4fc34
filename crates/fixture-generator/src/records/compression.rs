//! Compression-friendly records.
//!
//! Every record of the dataset carries the same large string and the same
//! nested object, so the serialized file is highly redundant.

use crate::clock::{format_timestamp, Clock};
use crate::generators::{generate_object, generate_string};
use crate::rng::RngContext;
use fixture_core::{Record, SizePalette, Value};

/// Length of the shared `base_string`.
pub const BASE_STRING_LENGTH: usize = 1_000;

/// Depth of the shared `base_object`.
pub const BASE_OBJECT_DEPTH: usize = 2;

/// Length of the per-record `varying_field`.
pub const VARYING_FIELD_LENGTH: usize = 10;

/// Generate `count` records sharing one `base_string` and one `base_object`.
pub fn generate_compression_records(
    rng: &mut RngContext,
    count: usize,
    clock: &dyn Clock,
    palette: &SizePalette,
) -> Vec<Record> {
    let base_string = Value::String(generate_string(rng, BASE_STRING_LENGTH));
    let base_object = Value::Object(generate_object(rng, BASE_OBJECT_DEPTH, palette));

    (0..count)
        .map(|i| {
            let varying_field = generate_string(rng, VARYING_FIELD_LENGTH);
            [
                ("id", Value::Integer(i as i64)),
                ("base_string", base_string.clone()),
                ("base_object", base_object.clone()),
                ("varying_field", Value::String(varying_field)),
                ("timestamp", Value::String(format_timestamp(&clock.now()))),
            ]
            .into_iter()
            .collect::<Record>()
        })
        .collect()
}
