//! String value generators.

use crate::rng::RngContext;

/// ASCII letters, digits and punctuation.
pub const STRING_PALETTE: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ\
0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Code-point bands for Unicode strings with the cumulative probability
/// that selects each band.
const ASCII_BAND: (f64, u32, u32) = (0.3, 0x20, 0x7E);
const LATIN1_BAND: (f64, u32, u32) = (0.5, 0x80, 0xFF);
const BMP_BAND: (f64, u32, u32) = (0.7, 0x100, 0xFFFF);
const SUPPLEMENTARY_BAND: (u32, u32) = (0x1_0000, 0x10_FFFF);

/// UTF-16 surrogates, which are not valid scalar values.
const SURROGATE_START: u32 = 0xD800;
const SURROGATE_COUNT: u32 = 0x800;

/// Generate a string of `length` characters drawn from [`STRING_PALETTE`].
pub fn generate_string(rng: &mut RngContext, length: usize) -> String {
    if length == 0 {
        return String::new();
    }
    (0..length)
        .map(|_| rng.choose(STRING_PALETTE) as char)
        .collect()
}

/// Generate a string of `length` Unicode scalar values.
///
/// Each character first picks a band (ASCII 30%, Latin-1 20%, BMP 20%,
/// supplementary planes 30%) and then a uniform code point inside it.
pub fn generate_unicode_string(rng: &mut RngContext, length: usize) -> String {
    if length == 0 {
        return String::new();
    }
    (0..length).map(|_| generate_unicode_char(rng)).collect()
}

fn generate_unicode_char(rng: &mut RngContext) -> char {
    let band = rng.unit();
    let code_point = if band < ASCII_BAND.0 {
        rng.int_in(ASCII_BAND.1..=ASCII_BAND.2)
    } else if band < LATIN1_BAND.0 {
        rng.int_in(LATIN1_BAND.1..=LATIN1_BAND.2)
    } else if band < BMP_BAND.0 {
        // Draw over the band with the surrogate block cut out, then shift past it.
        let (_, start, end) = BMP_BAND;
        let offset = rng.int_in(0..=end - start - SURROGATE_COUNT);
        let cp = start + offset;
        if cp >= SURROGATE_START {
            cp + SURROGATE_COUNT
        } else {
            cp
        }
    } else {
        rng.int_in(SUPPLEMENTARY_BAND.0..=SUPPLEMENTARY_BAND.1)
    };
    char::from_u32(code_point).unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_94_characters() {
        assert_eq!(STRING_PALETTE.len(), 94);
        assert!(STRING_PALETTE.iter().all(|b| b.is_ascii_graphic()));
    }

    #[test]
    fn test_generate_string_length() {
        let mut rng = RngContext::new(42);
        assert_eq!(generate_string(&mut rng, 0), "");
        for length in [1, 10, 100, 1000] {
            let s = generate_string(&mut rng, length);
            assert_eq!(s.len(), length);
            assert!(s.bytes().all(|b| STRING_PALETTE.contains(&b)));
        }
    }

    #[test]
    fn test_zero_length_draws_nothing() {
        let mut a = RngContext::new(5);
        let mut b = RngContext::new(5);
        generate_string(&mut a, 0);
        generate_unicode_string(&mut a, 0);
        assert_eq!(a.int_in(0u64..=u64::MAX), b.int_in(0u64..=u64::MAX));
    }

    #[test]
    fn test_unicode_string_is_valid_and_counted_in_chars() {
        let mut rng = RngContext::new(42);
        let s = generate_unicode_string(&mut rng, 5000);
        assert_eq!(s.chars().count(), 5000);
        assert!(!s.contains(char::REPLACEMENT_CHARACTER));
        for c in s.chars() {
            let cp = c as u32;
            assert!(
                (0x20..=0x7E).contains(&cp)
                    || (0x80..=0xFF).contains(&cp)
                    || (0x100..=0xFFFF).contains(&cp)
                    || (0x1_0000..=0x10_FFFF).contains(&cp)
            );
            assert!(!(0xD800..=0xDFFF).contains(&cp));
        }
    }

    #[test]
    fn test_unicode_band_split() {
        let mut rng = RngContext::new(123);
        let s = generate_unicode_string(&mut rng, 20_000);
        let total = s.chars().count() as f64;
        let ascii = s.chars().filter(|c| (*c as u32) <= 0x7E).count() as f64;
        let supplementary = s.chars().filter(|c| (*c as u32) >= 0x1_0000).count() as f64;

        assert!((ascii / total - 0.3).abs() < 0.02);
        assert!((supplementary / total - 0.3).abs() < 0.02);
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = RngContext::new(42);
        let mut rng2 = RngContext::new(42);

        assert_eq!(generate_string(&mut rng1, 64), generate_string(&mut rng2, 64));
        assert_eq!(
            generate_unicode_string(&mut rng1, 64),
            generate_unicode_string(&mut rng2, 64)
        );
    }
}
