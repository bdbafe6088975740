//! Parsing of loosely typed mask-bit arguments.

use super::MAX_LENGTH;
use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // optional sign, no leading zeros, surrounding whitespace allowed
    static ref INTEGER_RE: Regex =
        Regex::new(r"^\s*([+-]?(?:0|[1-9][0-9]*))\s*$").expect("Invalid Regex?");
}

/// Parse an integer the way mask-bit arguments are written, e.g. `"24"`,
/// `" +24 "` or `"-1"`.
///
/// Only the syntax is checked; range checks are left to the caller since the
/// lower bound depends on the private class.
pub fn parse_integer(input: &str) -> Result<i64> {
    let digits = INTEGER_RE
        .captures(input)
        .and_then(|c| c.get(1))
        .ok_or_else(not_an_integer)?
        .as_str();
    let value: i64 = digits.parse().map_err(|_| not_an_integer())?;
    log::trace!("parse_integer({input:?}) = {value}");
    Ok(value)
}

/// Parse a mask width given as text and check it lies in `0..=32`.
pub fn parse_mask_bits(input: &str) -> Result<u8> {
    let value = parse_integer(input)?;
    narrow_mask_bits(value)
}

/// Narrow a parsed value to a mask width in `0..=32`.
pub(crate) fn narrow_mask_bits(value: i64) -> Result<u8> {
    u8::try_from(value)
        .ok()
        .filter(|bits| *bits <= MAX_LENGTH)
        .ok_or_else(|| {
            Error::InvalidMaskBits(format!(
                "Mask bits have to be between 0 and {MAX_LENGTH}, got {value}."
            ))
        })
}

fn not_an_integer() -> Error {
    Error::InvalidMaskBits("The bits parameter has to be an integer.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse_mask_bits("24").unwrap(), 24);
        assert_eq!(parse_mask_bits("0").unwrap(), 0);
        assert_eq!(parse_mask_bits("32").unwrap(), 32);
    }

    #[test]
    fn test_parse_sign_and_whitespace() {
        assert_eq!(parse_mask_bits(" 16\n").unwrap(), 16);
        assert_eq!(parse_mask_bits("+8").unwrap(), 8);
        assert_eq!(parse_mask_bits("-0").unwrap(), 0);
    }

    #[test]
    fn test_parse_not_integer() {
        for input in ["x", "", " ", "24.0", "2 4", "024", "0x18", "24/", "99999999999999999999"] {
            assert_eq!(
                parse_mask_bits(input),
                Err(not_an_integer()),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(
            parse_mask_bits("33").unwrap_err().to_string(),
            "Mask bits have to be between 0 and 32, got 33."
        );
        assert!(matches!(
            parse_mask_bits("-1"),
            Err(Error::InvalidMaskBits(_))
        ));
        assert!(parse_mask_bits("300").is_err());
    }

    #[test]
    fn test_parse_integer_keeps_negatives() {
        assert_eq!(parse_integer("-1").unwrap(), -1);
        assert_eq!(parse_integer(" -5 ").unwrap(), -5);
        assert_eq!(parse_integer("300").unwrap(), 300);
        assert_eq!(parse_integer("-x"), Err(not_an_integer()));
    }
}
