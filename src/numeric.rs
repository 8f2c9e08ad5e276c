//! Numeral detection and coercion for textual input.
//!
//! A string is numeric when, ignoring surrounding whitespace, it is entirely
//!
//! ```text
//! [+-]? ( digits ( '.' digits? )? | '.' digits ) ( [eE] [+-]? digits )?
//! ```
//!
//! Literals without a fraction or exponent that fit `i64` coerce to integers;
//! everything else coerces to `f64`.

use tracing::debug;

/// Whitespace tolerated around a numeral.
const NUMERAL_WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\x0B', '\x0C'];

/// A coerced number, carrying its effective kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Numeral {
    Int(i64),
    Float(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Integral,
    Fractional,
}

/// Returns `true` if `text` spells a base-10 numeral, ignoring surrounding whitespace.
///
/// ```
/// assert!(effective_type::is_numeric(" 1.5e3 "));
/// assert!(!effective_type::is_numeric("1a"));
/// ```
pub fn is_numeric(text: &str) -> bool {
    scan(text.trim_matches(NUMERAL_WHITESPACE)).is_some()
}

/// Coerces a numeric string to an integer or float.
///
/// Returns `None` when `text` is not numeric, or when it only fits as an
/// infinite float. Integer literals outside the `i64` range widen to float.
pub(crate) fn coerce(text: &str) -> Option<Numeral> {
    let literal = text.trim_matches(NUMERAL_WHITESPACE);
    match scan(literal)? {
        Shape::Integral => match retain_numeral_chars(literal, false).parse::<i64>() {
            Ok(number) => Some(Numeral::Int(number)),
            Err(_) => {
                debug!(len = literal.len(), "integer literal overflows i64, widening to float");
                parse_float(literal)
            }
        },
        Shape::Fractional => parse_float(literal),
    }
}

/// Keeps only the characters that can form a signed numeral.
///
/// With `allow_fraction` the decimal point and exponent marker survive too.
pub(crate) fn retain_numeral_chars(text: &str, allow_fraction: bool) -> String {
    text.chars()
        .filter(|&c| {
            c.is_ascii_digit()
                || c == '+'
                || c == '-'
                || (allow_fraction && matches!(c, '.' | 'e' | 'E'))
        })
        .collect()
}

fn parse_float(literal: &str) -> Option<Numeral> {
    let number: f64 = retain_numeral_chars(literal, true).parse().ok()?;
    if number.is_finite() {
        Some(Numeral::Float(number))
    } else {
        debug!(len = literal.len(), "float literal out of range, treating as text");
        None
    }
}

fn scan(literal: &str) -> Option<Shape> {
    let bytes = literal.as_bytes();
    let mut pos = 0;
    let mut shape = Shape::Integral;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        shape = Shape::Fractional;
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        shape = Shape::Fractional;
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return None;
        }
        pos += exp_digits;
    }

    (pos == bytes.len()).then_some(shape)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_numerals() {
        for text in ["0", "1", "-1", "+7", "007", "1.1", "-1.1", "1.", ".5", "1e3", "2.5E-4"] {
            assert!(is_numeric(text), "{text:?} should be numeric");
        }
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert!(is_numeric("1 "));
        assert!(is_numeric("\t 42\n"));
        assert!(!is_numeric("4 2"));
    }

    #[test]
    fn rejects_partial_numerals() {
        for text in ["", " ", ".", "+", "-", "1a", "1.1a", "a1", "1e", "1e+", "0x1A", "true", "1..2", "--1"] {
            assert!(!is_numeric(text), "{text:?} should not be numeric");
        }
    }

    #[test]
    fn integral_literals_coerce_to_int() {
        assert_eq!(coerce("1"), Some(Numeral::Int(1)));
        assert_eq!(coerce("-0"), Some(Numeral::Int(0)));
        assert_eq!(coerce("+12"), Some(Numeral::Int(12)));
        assert_eq!(coerce("1 "), Some(Numeral::Int(1)));
    }

    #[test]
    fn fraction_or_exponent_coerces_to_float() {
        assert_eq!(coerce("1.1"), Some(Numeral::Float(1.1)));
        assert_eq!(coerce("1.0"), Some(Numeral::Float(1.0)));
        assert_eq!(coerce("1e3"), Some(Numeral::Float(1000.0)));
        assert_eq!(coerce(".5"), Some(Numeral::Float(0.5)));
    }

    #[test]
    fn integer_overflow_widens_to_float() {
        assert_eq!(
            coerce("99999999999999999999"),
            Some(Numeral::Float(99999999999999999999.0))
        );
        assert_eq!(coerce("9223372036854775807"), Some(Numeral::Int(i64::MAX)));
    }

    #[test]
    fn float_overflow_is_not_coerced() {
        assert_eq!(coerce("1e400"), None);
        assert_eq!(coerce("-1e400"), None);
    }

    #[test]
    fn retain_numeral_chars_filters_noise() {
        assert_eq!(retain_numeral_chars(" -12 ", false), "-12");
        assert_eq!(retain_numeral_chars("1.5e3", false), "153");
        assert_eq!(retain_numeral_chars("1.5e3", true), "1.5e3");
    }
}
