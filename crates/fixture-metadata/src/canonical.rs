//! Canonical serialization and SHA-256 content hashing.
//!
//! The canonical form is written directly rather than through a map type,
//! so key order never depends on which map implementation serde_json was
//! built with.

use crate::error::MetadataError;
use fixture_core::{Object, Value};
use sha2::{Digest, Sha256};
use std::io::Write;

/// Values that can be written in canonical form.
pub trait Canonicalize {
    /// Write compact JSON with object keys sorted at every level.
    fn write_canonical<W: Write>(&self, out: &mut W) -> serde_json::Result<()>;
}

impl Canonicalize for Value {
    fn write_canonical<W: Write>(&self, out: &mut W) -> serde_json::Result<()> {
        match self {
            Value::String(s) | Value::UnicodeString(s) => serde_json::to_writer(out, s),
            Value::Integer(i) => serde_json::to_writer(out, i),
            Value::Float(f) => serde_json::to_writer(out, f),
            Value::Boolean(b) => serde_json::to_writer(out, b),
            Value::Null => raw(out, b"null"),
            Value::Object(obj) => obj.write_canonical(out),
            Value::Array(items) => items.as_slice().write_canonical(out),
        }
    }
}

impl Canonicalize for Object {
    fn write_canonical<W: Write>(&self, out: &mut W) -> serde_json::Result<()> {
        let mut entries: Vec<(&str, &Value)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        write_object(out, entries)
    }
}

impl Canonicalize for serde_json::Value {
    fn write_canonical<W: Write>(&self, out: &mut W) -> serde_json::Result<()> {
        match self {
            serde_json::Value::Object(map) => {
                let mut entries: Vec<(&str, &serde_json::Value)> =
                    map.iter().map(|(k, v)| (k.as_str(), v)).collect();
                entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
                write_object(out, entries)
            }
            serde_json::Value::Array(items) => items.as_slice().write_canonical(out),
            scalar => serde_json::to_writer(out, scalar),
        }
    }
}

impl<T: Canonicalize> Canonicalize for [T] {
    fn write_canonical<W: Write>(&self, out: &mut W) -> serde_json::Result<()> {
        raw(out, b"[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                raw(out, b",")?;
            }
            item.write_canonical(out)?;
        }
        raw(out, b"]")
    }
}

fn write_object<W: Write, T: Canonicalize>(
    out: &mut W,
    entries: Vec<(&str, &T)>,
) -> serde_json::Result<()> {
    raw(out, b"{")?;
    for (i, (key, value)) in entries.into_iter().enumerate() {
        if i > 0 {
            raw(out, b",")?;
        }
        serde_json::to_writer(&mut *out, key)?;
        raw(out, b":")?;
        value.write_canonical(out)?;
    }
    raw(out, b"}")
}

fn raw<W: Write>(out: &mut W, bytes: &[u8]) -> serde_json::Result<()> {
    out.write_all(bytes).map_err(serde_json::Error::io)
}

/// The canonical byte form of a value.
pub fn canonical_bytes<T: Canonicalize + ?Sized>(value: &T) -> Result<Vec<u8>, MetadataError> {
    let mut out = Vec::new();
    value.write_canonical(&mut out)?;
    Ok(out)
}

/// Lowercase hex SHA-256 of the canonical form of a value.
pub fn content_hash<T: Canonicalize + ?Sized>(value: &T) -> Result<String, MetadataError> {
    let mut hasher = Sha256::new();
    value.write_canonical(&mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}
