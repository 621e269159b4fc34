//! Array and object generators.
//!
//! Recursion is bounded by explicit budgets: objects carry their remaining
//! depth, arrays their exact size, and the nested shapes inside arrays use
//! small fixed bounds. Finite inputs therefore always produce finite output.

use super::{palette_string, palette_string_array, palette_unicode_string};
use crate::generators::numeric::{generate_boolean, generate_float, generate_integer};
use crate::rng::RngContext;
use fixture_core::{FieldType, Object, SizePalette, Value};
use std::ops::RangeInclusive;

/// Depth of objects generated as array elements.
pub const ARRAY_OBJECT_DEPTH: usize = 2;

/// Size range of arrays generated as array elements.
pub const INNER_ARRAY_SIZE: RangeInclusive<usize> = 1..=10;

/// Number of fields drawn for each object level.
pub const OBJECT_FIELD_COUNT: RangeInclusive<usize> = 1..=10;

/// Generate an array of exactly `size` elements of type `element_type`.
///
/// Object elements have depth [`ARRAY_OBJECT_DEPTH`]; array elements are
/// string arrays with a size drawn from [`INNER_ARRAY_SIZE`].
pub fn generate_array(
    rng: &mut RngContext,
    size: usize,
    element_type: FieldType,
    palette: &SizePalette,
) -> Value {
    if size == 0 {
        return Value::Array(Vec::new());
    }

    let mut items = Vec::with_capacity(size);
    for _ in 0..size {
        let item = match element_type {
            FieldType::String => palette_string(rng, palette),
            FieldType::UnicodeString => palette_unicode_string(rng, palette),
            FieldType::Integer => Value::Integer(generate_integer(rng)),
            FieldType::Float => Value::Float(generate_float(rng)),
            FieldType::Boolean => Value::Boolean(generate_boolean(rng)),
            FieldType::Null => Value::Null,
            FieldType::Object => Value::Object(generate_object(rng, ARRAY_OBJECT_DEPTH, palette)),
            FieldType::Array => {
                let inner_size = rng.int_in(INNER_ARRAY_SIZE);
                generate_array(rng, inner_size, FieldType::String, palette)
            }
        };
        items.push(item);
    }

    Value::Array(items)
}

/// Generate an object nested at most `depth` levels deep.
///
/// Depth 0 yields an empty object. Each level draws a field count from
/// [`OBJECT_FIELD_COUNT`] and a type for each field from
/// [`FieldType::OBJECT_PALETTE`]. Fields are named `field_<i>` after their
/// draw position.
pub fn generate_object(rng: &mut RngContext, depth: usize, palette: &SizePalette) -> Object {
    if depth == 0 {
        return Object::new();
    }

    let field_count = rng.int_in(OBJECT_FIELD_COUNT);
    let mut obj = Object::with_capacity(field_count);

    for i in 0..field_count {
        let field_type = rng.choose(&FieldType::OBJECT_PALETTE);
        let value = match field_type {
            FieldType::String => palette_string(rng, palette),
            FieldType::UnicodeString => palette_unicode_string(rng, palette),
            FieldType::Integer => Value::Integer(generate_integer(rng)),
            FieldType::Float => Value::Float(generate_float(rng)),
            FieldType::Boolean => Value::Boolean(generate_boolean(rng)),
            FieldType::Null => Value::Null,
            FieldType::Object if depth > 1 => Value::Object(generate_object(rng, depth - 1, palette)),
            // Last level: an object-typed field is dropped rather than expanded,
            // so the object may hold fewer fields than were drawn.
            FieldType::Object => continue,
            FieldType::Array => palette_string_array(rng, palette),
        };
        obj.insert(format!("field_{i}"), value);
    }

    obj
}

/// Nesting depth of a value: scalars are 0, an object or array adds one
/// level on top of its deepest child.
pub fn value_depth(value: &Value) -> usize {
    match value {
        Value::Object(obj) => 1 + obj.iter().map(|(_, v)| value_depth(v)).max().unwrap_or(0),
        Value::Array(arr) => 1 + arr.iter().map(value_depth).max().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn small_palette() -> SizePalette {
        SizePalette {
            string_lengths: vec![0, 1, 5],
            array_sizes: vec![1, 3],
        }
    }

    /// Object depth counting only object-in-object nesting.
    fn object_depth(obj: &Object) -> usize {
        1 + obj
            .iter()
            .filter_map(|(_, v)| v.as_object())
            .map(object_depth)
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn test_empty_shapes() {
        let mut rng = RngContext::new(42);
        let palette = small_palette();

        assert!(generate_object(&mut rng, 0, &palette).is_empty());
        for t in FieldType::OBJECT_PALETTE {
            assert_eq!(generate_array(&mut rng, 0, t, &palette), Value::Array(vec![]));
        }
    }

    #[test]
    fn test_array_element_types() {
        let mut rng = RngContext::new(42);
        let palette = small_palette();

        for t in [
            FieldType::String,
            FieldType::UnicodeString,
            FieldType::Integer,
            FieldType::Float,
            FieldType::Boolean,
            FieldType::Null,
            FieldType::Object,
            FieldType::Array,
        ] {
            let value = generate_array(&mut rng, 25, t, &palette);
            let items = value.as_array().unwrap();
            assert_eq!(items.len(), 25);
            assert!(items.iter().all(|item| item.kind() == t), "{t} array");
        }
    }

    #[test]
    fn test_inner_arrays_are_small_string_arrays() {
        let mut rng = RngContext::new(9);
        let palette = small_palette();

        let value = generate_array(&mut rng, 50, FieldType::Array, &palette);
        for inner in value.as_array().unwrap() {
            let inner = inner.as_array().unwrap();
            assert!(INNER_ARRAY_SIZE.contains(&inner.len()));
            assert!(inner.iter().all(|v| v.kind() == FieldType::String));
        }
    }

    #[test]
    fn test_object_field_names_are_positional() {
        let mut rng = RngContext::new(42);
        let palette = small_palette();

        for _ in 0..50 {
            let obj = generate_object(&mut rng, 3, &palette);
            let mut last = None;
            for key in obj.keys() {
                let index: usize = key.strip_prefix("field_").unwrap().parse().unwrap();
                assert!(index < 10);
                if let Some(prev) = last {
                    assert!(index > prev);
                }
                last = Some(index);
            }
        }
    }

    #[test]
    fn test_depth_one_never_nests_objects() {
        let mut rng = RngContext::new(1);
        let palette = small_palette();

        for _ in 0..200 {
            let obj = generate_object(&mut rng, 1, &palette);
            assert!(obj.iter().all(|(_, v)| v.kind() != FieldType::Object));
        }
    }

    #[test]
    fn test_array_fields_use_palette_sizes() {
        let mut rng = RngContext::new(3);
        let palette = small_palette();

        for _ in 0..100 {
            let obj = generate_object(&mut rng, 2, &palette);
            for (_, v) in obj.iter() {
                if let Value::Array(items) = v {
                    assert!(palette.array_sizes.contains(&items.len()));
                    assert!(items.iter().all(|i| i.kind() == FieldType::String));
                }
            }
        }
    }

    #[test]
    fn test_value_depth() {
        assert_eq!(value_depth(&Value::Null), 0);
        assert_eq!(value_depth(&Value::Array(vec![])), 1);
        let mut inner = Object::new();
        inner.insert("a", Value::Array(vec![Value::Integer(1)]));
        let mut outer = Object::new();
        outer.insert("b", Value::Object(inner));
        assert_eq!(value_depth(&Value::Object(outer)), 3);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn property_object_respects_depth_and_field_bounds(seed in any::<u64>(), depth in 0usize..5) {
            let mut rng = RngContext::new(seed);
            let obj = generate_object(&mut rng, depth, &small_palette());

            if depth == 0 {
                prop_assert!(obj.is_empty());
            } else {
                prop_assert!(obj.len() <= *OBJECT_FIELD_COUNT.end());
                prop_assert!(object_depth(&obj) <= depth);
            }
        }

        #[test]
        fn property_array_has_exact_size(seed in any::<u64>(), size in 0usize..64) {
            let mut rng = RngContext::new(seed);
            let value = generate_array(&mut rng, size, FieldType::Integer, &small_palette());
            prop_assert_eq!(value.as_array().map(|a| a.len()), Some(size));
        }

        #[test]
        fn property_same_seed_same_object(seed in any::<u64>()) {
            let palette = small_palette();
            let mut rng1 = RngContext::new(seed);
            let mut rng2 = RngContext::new(seed);
            prop_assert_eq!(
                generate_object(&mut rng1, 3, &palette),
                generate_object(&mut rng2, 3, &palette)
            );
        }
    }
}
