//! Individual value generators.
//!
//! Scalar generators produce one value each; composite generators build
//! arrays and objects by calling back into the scalar and composite
//! generators with an explicit depth or size budget.

pub mod composite;
pub mod numeric;
pub mod string;

pub use composite::{generate_array, generate_object, ARRAY_OBJECT_DEPTH, INNER_ARRAY_SIZE};
pub use numeric::{generate_boolean, generate_float, generate_integer};
pub use string::{generate_string, generate_unicode_string};

use crate::rng::RngContext;
use fixture_core::{SizePalette, Value};

/// Generate an ASCII string whose length is drawn from the palette.
pub fn palette_string(rng: &mut RngContext, palette: &SizePalette) -> Value {
    let length = rng.choose(&palette.string_lengths);
    Value::String(generate_string(rng, length))
}

/// Generate a Unicode string whose length is drawn from the palette.
pub fn palette_unicode_string(rng: &mut RngContext, palette: &SizePalette) -> Value {
    let length = rng.choose(&palette.string_lengths);
    Value::UnicodeString(generate_unicode_string(rng, length))
}

/// Generate an array of palette strings whose size is drawn from the palette.
pub fn palette_string_array(rng: &mut RngContext, palette: &SizePalette) -> Value {
    let size = rng.choose(&palette.array_sizes);
    generate_array(rng, size, fixture_core::FieldType::String, palette)
}
