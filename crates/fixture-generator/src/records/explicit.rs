//! Records built from an explicit list of field types.

use crate::generators::{
    generate_boolean, generate_float, generate_integer, generate_object, palette_string,
    palette_string_array, palette_unicode_string,
};
use crate::rng::RngContext;
use fixture_core::{FieldType, Record, SizePalette, Value};
use std::ops::RangeInclusive;

/// Depth range of object-typed record fields.
pub const RECORD_OBJECT_DEPTH: RangeInclusive<usize> = 1..=3;

/// Generate one record with a field per requested type, named `field_<i>`.
pub fn generate_record(
    rng: &mut RngContext,
    field_types: &[FieldType],
    palette: &SizePalette,
) -> Record {
    let mut record = Record::with_capacity(field_types.len());

    for (i, field_type) in field_types.iter().enumerate() {
        let value = match field_type {
            FieldType::String => palette_string(rng, palette),
            FieldType::UnicodeString => palette_unicode_string(rng, palette),
            FieldType::Integer => Value::Integer(generate_integer(rng)),
            FieldType::Float => Value::Float(generate_float(rng)),
            FieldType::Boolean => Value::Boolean(generate_boolean(rng)),
            FieldType::Null => Value::Null,
            FieldType::Object => {
                let depth = rng.int_in(RECORD_OBJECT_DEPTH);
                Value::Object(generate_object(rng, depth, palette))
            }
            FieldType::Array => palette_string_array(rng, palette),
        };
        record.insert(format!("field_{i}"), value);
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_palette() -> SizePalette {
        SizePalette {
            string_lengths: vec![1, 10],
            array_sizes: vec![1, 10],
        }
    }

    #[test]
    fn test_fields_match_requested_types() {
        let mut rng = RngContext::new(42);
        let types = [FieldType::String, FieldType::Integer, FieldType::Boolean];

        let record = generate_record(&mut rng, &types, &small_palette());

        assert_eq!(
            record.keys().collect::<Vec<_>>(),
            vec!["field_0", "field_1", "field_2"]
        );
        for (i, (_, value)) in record.iter().enumerate() {
            assert_eq!(value.kind(), types[i]);
        }
    }

    #[test]
    fn test_every_type_is_honoured() {
        let mut rng = RngContext::new(7);
        let types = [
            FieldType::String,
            FieldType::UnicodeString,
            FieldType::Integer,
            FieldType::Float,
            FieldType::Boolean,
            FieldType::Null,
            FieldType::Object,
            FieldType::Array,
        ];

        for _ in 0..20 {
            let record = generate_record(&mut rng, &types, &small_palette());
            assert_eq!(record.len(), types.len());
            for (i, (_, value)) in record.iter().enumerate() {
                assert_eq!(value.kind(), types[i]);
            }
        }
    }

    #[test]
    fn test_duplicate_types_get_distinct_names() {
        let mut rng = RngContext::new(1);
        let types = [FieldType::Integer, FieldType::Integer, FieldType::Integer];
        let record = generate_record(&mut rng, &types, &small_palette());
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_no_field_types_yields_empty_record() {
        let mut rng = RngContext::new(1);
        assert!(generate_record(&mut rng, &[], &small_palette()).is_empty());
    }
}
