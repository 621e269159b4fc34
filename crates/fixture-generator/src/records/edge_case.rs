//! The fixed edge-case corpus.
//!
//! The number, order and shape of the records never change. The contents
//! of the long-string, Unicode, nested-object and large-array records are
//! drawn from the run's RNG, so those depend on the seed.

use crate::generators::{generate_array, generate_object, generate_string, generate_unicode_string};
use crate::rng::RngContext;
use fixture_core::{FieldType, Record, SizePalette, Value};

/// Number of records in the corpus.
pub const EDGE_CASE_RECORD_COUNT: usize = 7;

/// Length of each string in the long-string record.
pub const LONG_STRING_LENGTH: usize = 100_000;

/// Length of each string in the Unicode record.
pub const UNICODE_STRING_LENGTH: usize = 100;

/// Depth of each object in the nested record.
pub const NESTED_OBJECT_DEPTH: usize = 5;

/// Size of each array in the nested record.
pub const LARGE_ARRAY_SIZE: usize = 10_000;

/// Generate the seven edge-case records, in order:
///
/// 1. an empty record
/// 2. three null fields
/// 3. three empty-string fields
/// 4. three strings of [`LONG_STRING_LENGTH`] characters
/// 5. `i64::MAX`, `i64::MIN` and `f64::MAX`
/// 6. three Unicode strings of [`UNICODE_STRING_LENGTH`] characters
/// 7. three objects of depth [`NESTED_OBJECT_DEPTH`] and three arrays of
///    [`LARGE_ARRAY_SIZE`] strings, integers and floats
pub fn generate_edge_case_records(rng: &mut RngContext, palette: &SizePalette) -> Vec<Record> {
    let mut records = Vec::with_capacity(EDGE_CASE_RECORD_COUNT);

    records.push(Record::new());

    records.push(three_fields(|| Value::Null));

    records.push(three_fields(|| Value::String(String::new())));

    records.push(three_fields(|| {
        Value::String(generate_string(rng, LONG_STRING_LENGTH))
    }));

    records.push(
        [
            ("field1", Value::Integer(i64::MAX)),
            ("field2", Value::Integer(i64::MIN)),
            ("field3", Value::Float(f64::MAX)),
        ]
        .into_iter()
        .collect(),
    );

    records.push(three_fields(|| {
        Value::UnicodeString(generate_unicode_string(rng, UNICODE_STRING_LENGTH))
    }));

    let mut nested = three_fields(|| Value::Object(generate_object(rng, NESTED_OBJECT_DEPTH, palette)));
    for (name, element_type) in [
        ("field4", FieldType::String),
        ("field5", FieldType::Integer),
        ("field6", FieldType::Float),
    ] {
        nested.insert(name, generate_array(rng, LARGE_ARRAY_SIZE, element_type, palette));
    }
    records.push(nested);

    records
}

/// A record with `field1`..`field3`, generated in order.
fn three_fields(mut make: impl FnMut() -> Value) -> Record {
    ["field1", "field2", "field3"]
        .into_iter()
        .map(|name| (name, make()))
        .collect()
}
