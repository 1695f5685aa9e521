//! # Error reporting
//!
//! A single enum describing everything that can go wrong between reading the raw operands and
//! writing the encoded result. Each variant renders to a distinct message for the end user.
use std::fmt;

use num_bigint::{BigInt, ParseBigIntError};
use thiserror::Error;

/// Shorthand for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An `Error` terminates the single computation in which it occurs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An operand is not a base-10 integer.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The operation name is not one of the recognized names.
    #[error("unknown operation \"{0}\"")]
    UnknownOperation(String),
    /// The operation is recognized, but not enabled in the active operation set.
    #[error("operation \"{0}\" is not available in this configuration")]
    UnsupportedOperation(String),
    /// A zero denominator was supplied, or a rational with a zero numerator was used as divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// A value does not fit in its 256-bit word.
    #[error("{slot} {value} does not fit in a 256-bit {slot} word")]
    EncodingOverflow {
        /// Which of the two words overflowed.
        slot: Slot,
        /// The offending value.
        value: BigInt,
    },
    /// Text handed to the decoder is not two hexadecimal 256-bit words.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),
}

/// The two words of an encoded result.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Slot {
    /// First word, signed.
    Numerator,
    /// Second word, unsigned.
    Denominator,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Slot::Numerator => "numerator",
            Slot::Denominator => "denominator",
        })
    }
}

/// A `ParseError` is created when operand text could not be read as an integer.
///
/// It keeps the text that was read and, when available, the error of the underlying integer
/// parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("could not parse \"{text}\" as a base-10 integer")]
pub struct ParseError {
    text: String,
    #[source]
    source: Option<ParseBigIntError>,
}

impl ParseError {
    /// Create a new `ParseError` without an underlying cause.
    ///
    /// # Arguments
    ///
    /// * `text`: The operand text that was rejected.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), source: None }
    }

    /// Wrap the error of the integer parser.
    ///
    /// # Arguments
    ///
    /// * `text`: The operand text that was rejected.
    /// * `source`: Why the integer parser rejected it.
    pub fn wrap(text: impl Into<String>, source: ParseBigIntError) -> Self {
        Self { text: text.into(), source: Some(source) }
    }

    /// The text that could not be parsed.
    pub fn text(&self) -> &str {
        &self.text
    }
}
