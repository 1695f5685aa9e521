//! # Operand parsing
//!
//! Reading arbitrary precision integers from decimal text.
use std::str::FromStr;

use num_bigint::BigInt;

use crate::io::error::{ParseError, Result};

/// Parse a base-10 signed integer of arbitrary magnitude.
///
/// Surrounding whitespace and a single leading sign are accepted, as are single `_` separators
/// between digits.
///
/// # Errors
///
/// A `ParseError` when the text is empty or is not an integer.
pub fn parse_integer(text: &str) -> Result<BigInt> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    // The underlying parser also accepts leading, trailing and repeated separators.
    let misplaced_separator = digits.starts_with('_') || digits.ends_with('_') || digits.contains("__");
    if digits.is_empty() || misplaced_separator {
        return Err(ParseError::new(text).into());
    }

    BigInt::from_str(trimmed)
        .map_err(|error| ParseError::wrap(text, error).into())
}
