//! Value representations for generated fixtures.
//!
//! `Value` is the tagged union every generator produces. Objects keep their
//! fields in insertion order so that a dataset serializes exactly the way it
//! was built; hashing canonicalizes key order separately.

use crate::types::FieldType;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// A single top-level record.
pub type Record = Object;

/// An ordered sequence of records.
pub type Dataset = Vec<Record>;

/// A generated value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// String drawn from the ASCII palette
    String(String),

    /// String drawn from the Unicode code-point bands
    UnicodeString(String),

    /// 64-bit signed integer
    Integer(i64),

    /// 64-bit floating point
    Float(f64),

    /// Boolean value
    Boolean(bool),

    /// Null value
    Null,

    /// Insertion-ordered object
    Object(Object),

    /// Array of values
    Array(Vec<Value>),
}

impl Value {
    /// The field type this value was generated as.
    pub fn kind(&self) -> FieldType {
        match self {
            Value::String(_) => FieldType::String,
            Value::UnicodeString(_) => FieldType::UnicodeString,
            Value::Integer(_) => FieldType::Integer,
            Value::Float(_) => FieldType::Float,
            Value::Boolean(_) => FieldType::Boolean,
            Value::Null => FieldType::Null,
            Value::Object(_) => FieldType::Object,
            Value::Array(_) => FieldType::Array,
        }
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get this value as a string reference (ASCII or Unicode).
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::UnicodeString(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an object.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Try to get this value as an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Convert to a `serde_json::Value`.
    ///
    /// Non-finite floats have no JSON representation and become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::String(s) | Value::UnicodeString(s) => serde_json::Value::String(s.clone()),
            Value::Integer(i) => serde_json::Value::from(*i),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Null => serde_json::Value::Null,
            Value::Object(obj) => obj.to_json(),
            Value::Array(arr) => serde_json::Value::Array(arr.iter().map(Value::to_json).collect()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(s) | Value::UnicodeString(s) => serializer.serialize_str(s),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Null => serializer.serialize_unit(),
            Value::Object(obj) => obj.serialize(serializer),
            Value::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for item in arr {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

/// Object with fields kept in insertion order.
///
/// Field counts are small (bounded by the generator), so lookups scan
/// linearly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    fields: Vec<(String, Value)>,
}

impl Object {
    /// Create an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty object with room for `capacity` fields.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Insert a field. An existing field with the same name is replaced in place.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.fields.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Get a field by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find_map(|(k, v)| (k == name).then_some(v))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the object has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Convert to a `serde_json::Value::Object`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.fields
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        )
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut obj = Object::new();
        for (k, v) in iter {
            obj.insert(k, v);
        }
        obj
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_preserves_insertion_order() {
        let obj: Object = [
            ("zeta", Value::Integer(1)),
            ("alpha", Value::Integer(2)),
            ("mid", Value::Integer(3)),
        ]
        .into_iter()
        .collect();

        let keys: Vec<&str> = obj.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(
            serde_json::to_string(&obj).unwrap(),
            r#"{"zeta":1,"alpha":2,"mid":3}"#
        );
    }

    #[test]
    fn test_object_insert_replaces_in_place() {
        let mut obj = Object::new();
        obj.insert("a", Value::Null);
        obj.insert("b", Value::Boolean(true));
        obj.insert("a", Value::Integer(7));

        assert_eq!(obj.len(), 2);
        assert_eq!(obj.get("a"), Some(&Value::Integer(7)));
        assert_eq!(obj.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::String("x".into()).kind(), FieldType::String);
        assert_eq!(Value::UnicodeString("é".into()).kind(), FieldType::UnicodeString);
        assert_eq!(Value::Integer(1).kind(), FieldType::Integer);
        assert_eq!(Value::Float(1.5).kind(), FieldType::Float);
        assert_eq!(Value::Boolean(false).kind(), FieldType::Boolean);
        assert_eq!(Value::Null.kind(), FieldType::Null);
        assert_eq!(Value::Object(Object::new()).kind(), FieldType::Object);
        assert_eq!(Value::Array(vec![]).kind(), FieldType::Array);
    }

    #[test]
    fn test_serialize_nested_value() {
        let mut inner = Object::new();
        inner.insert("flag", Value::Boolean(true));
        let value = Value::Array(vec![
            Value::Object(inner),
            Value::Null,
            Value::Float(2.5),
            Value::UnicodeString("ü".into()),
        ]);

        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"[{"flag":true},null,2.5,"ü"]"#
        );
    }

    #[test]
    fn test_extreme_numbers_to_json() {
        assert_eq!(Value::Integer(i64::MAX).to_json(), serde_json::json!(i64::MAX));
        assert_eq!(Value::Integer(i64::MIN).to_json(), serde_json::json!(i64::MIN));
        assert_eq!(Value::Float(f64::MAX).to_json(), serde_json::json!(f64::MAX));
        assert_eq!(Value::Float(f64::NAN).to_json(), serde_json::Value::Null);
    }

    #[test]
    fn test_to_json_matches_serialize() {
        let obj: Object = [
            ("b", Value::String("text".into())),
            ("a", Value::Array(vec![Value::Integer(-3), Value::Boolean(false)])),
        ]
        .into_iter()
        .collect();

        let via_serialize: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&obj).unwrap()).unwrap();
        assert_eq!(via_serialize, obj.to_json());
    }
}
