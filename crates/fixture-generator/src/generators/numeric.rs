//! Numeric and boolean value generators.

use crate::rng::RngContext;

/// Default lower bound for generated integers.
pub const DEFAULT_INT_MIN: i64 = -1_000_000;
/// Default upper bound for generated integers.
pub const DEFAULT_INT_MAX: i64 = 1_000_000;
/// Default lower bound for generated floats.
pub const DEFAULT_FLOAT_MIN: f64 = -1_000_000.0;
/// Default upper bound for generated floats.
pub const DEFAULT_FLOAT_MAX: f64 = 1_000_000.0;

/// Generate a random integer in the default range (inclusive).
pub fn generate_integer(rng: &mut RngContext) -> i64 {
    generate_int_range(rng, DEFAULT_INT_MIN, DEFAULT_INT_MAX)
}

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range(rng: &mut RngContext, min: i64, max: i64) -> i64 {
    rng.int_in(min..=max)
}

/// Generate a random float in the default range.
pub fn generate_float(rng: &mut RngContext) -> f64 {
    generate_float_range(rng, DEFAULT_FLOAT_MIN, DEFAULT_FLOAT_MAX)
}

/// Generate a random float in `[min, max)`.
pub fn generate_float_range(rng: &mut RngContext, min: f64, max: f64) -> f64 {
    rng.float_in(min, max)
}

/// Generate a random boolean.
pub fn generate_boolean(rng: &mut RngContext) -> bool {
    rng.coin()
}
