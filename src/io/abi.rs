//! # ABI encoding
//!
//! Results are written as two 256-bit big-endian words, the layout of a `(int256, uint256)` return
//! value at a contract call boundary. The first word holds the numerator in two's complement, the
//! second word the (positive) denominator. Each word is rendered as 64 lowercase hexadecimal
//! characters and the two are concatenated without separator.
use std::fmt;
use std::sync::LazyLock;

use itertools::repeat_n;
use num_bigint::{BigInt, Sign};
use num_traits::{One, Signed};

use crate::data::number_types::binary::Binary;
use crate::data::number_types::rational::Rational;
use crate::io::error::{Error, Result, Slot};

/// Number of bytes in a word.
pub const WORD_BYTES: usize = 32;
/// Number of hexadecimal characters in a rendered word.
pub const WORD_HEX_LENGTH: usize = 2 * WORD_BYTES;

/// Largest magnitude of a numerator, `2^255 - 1`.
static SIGNED_LIMIT: LazyLock<BigInt> = LazyLock::new(|| (BigInt::one() << 255) - 1);
/// Largest denominator, `2^256 - 1`.
static UNSIGNED_LIMIT: LazyLock<BigInt> = LazyLock::new(|| (BigInt::one() << 256) - 1);

/// A single 256-bit big-endian word.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Word([u8; WORD_BYTES]);

impl Word {
    /// Pack a signed integer as a two's complement word.
    ///
    /// # Errors
    ///
    /// `EncodingOverflow` when the magnitude exceeds `2^255 - 1`.
    pub fn from_signed(value: &BigInt, slot: Slot) -> Result<Self> {
        if value.abs() > *SIGNED_LIMIT {
            return Err(Error::EncodingOverflow { slot, value: value.clone() });
        }

        let fill = if value.is_negative() { 0xff } else { 0x00 };
        Ok(Self::pad(fill, &value.to_signed_bytes_be()))
    }

    /// Pack a non-negative integer as an unsigned word.
    ///
    /// # Errors
    ///
    /// `EncodingOverflow` when the value is negative or exceeds `2^256 - 1`.
    pub fn from_unsigned(value: &BigInt, slot: Slot) -> Result<Self> {
        if value.is_negative() || *value > *UNSIGNED_LIMIT {
            return Err(Error::EncodingOverflow { slot, value: value.clone() });
        }

        let (_, magnitude) = value.to_bytes_be();
        Ok(Self::pad(0x00, &magnitude))
    }

    /// Left pad big-endian bytes to a full word.
    fn pad(fill: u8, bytes: &[u8]) -> Self {
        debug_assert!(bytes.len() <= WORD_BYTES);

        let padded = repeat_n(fill, WORD_BYTES - bytes.len()).chain(bytes.iter().copied());

        let mut word = [0; WORD_BYTES];
        for (target, byte) in word.iter_mut().zip(padded) {
            *target = byte;
        }
        Self(word)
    }

    /// Read a word from exactly 64 hexadecimal characters, in either case.
    ///
    /// # Errors
    ///
    /// `MalformedEncoding` when the text has the wrong length or contains anything but hex digits.
    pub fn from_hex(text: &str) -> Result<Self> {
        if text.len() != WORD_HEX_LENGTH {
            return Err(Error::MalformedEncoding(format!(
                "a word has {} hexadecimal characters, found {}", WORD_HEX_LENGTH, text.len(),
            )));
        }
        if let Some(character) = text.chars().find(|character| !character.is_ascii_hexdigit()) {
            return Err(Error::MalformedEncoding(format!(
                "\"{}\" is not a hexadecimal digit", character,
            )));
        }

        let mut word = [0; WORD_BYTES];
        for (index, byte) in word.iter_mut().enumerate() {
            let pair = &text[2 * index..2 * index + 2];
            *byte = u8::from_str_radix(pair, 16)
                .map_err(|error| Error::MalformedEncoding(error.to_string()))?;
        }
        Ok(Self(word))
    }

    /// Interpret as a two's complement integer.
    pub fn to_signed(&self) -> BigInt {
        BigInt::from_signed_bytes_be(&self.0)
    }

    /// Interpret as an unsigned integer.
    pub fn to_unsigned(&self) -> BigInt {
        BigInt::from_bytes_be(Sign::Plus, &self.0)
    }

    /// The raw big-endian bytes.
    pub fn as_bytes(&self) -> &[u8; WORD_BYTES] {
        &self.0
    }
}

impl fmt::LowerHex for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Two words: the numerator (or comparison outcome) followed by the denominator.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Encoded {
    /// First word, signed.
    pub numerator: Word,
    /// Second word, unsigned.
    pub denominator: Word,
}

impl Encoded {
    /// The 64 raw bytes, numerator word first.
    pub fn to_bytes(&self) -> [u8; 2 * WORD_BYTES] {
        let mut bytes = [0; 2 * WORD_BYTES];
        bytes[..WORD_BYTES].copy_from_slice(self.numerator.as_bytes());
        bytes[WORD_BYTES..].copy_from_slice(self.denominator.as_bytes());
        bytes
    }
}

impl fmt::Display for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:x}{:x}", self.numerator, self.denominator)
    }
}

/// Values that can be written as a pair of ABI words.
pub trait Encode {
    /// Encode as two 256-bit words.
    ///
    /// # Errors
    ///
    /// `EncodingOverflow` when a part of the value does not fit its word.
    fn encode(&self) -> Result<Encoded>;
}

impl Encode for Rational {
    fn encode(&self) -> Result<Encoded> {
        Ok(Encoded {
            numerator: Word::from_signed(self.numer(), Slot::Numerator)?,
            denominator: Word::from_unsigned(self.denom(), Slot::Denominator)?,
        })
    }
}

/// A comparison outcome is written as `0/1` or `1/1`, itself a canonical rational.
impl Encode for Binary {
    fn encode(&self) -> Result<Encoded> {
        Ok(Encoded {
            numerator: Word::from_unsigned(&BigInt::from(*self), Slot::Numerator)?,
            denominator: Word::from_unsigned(&BigInt::one(), Slot::Denominator)?,
        })
    }
}

/// Read back the text written for an encoded result.
///
/// # Errors
///
/// `MalformedEncoding` when the text is not two hexadecimal words, `DivisionByZero` when the
/// denominator word is zero.
pub fn decode(text: &str) -> Result<Rational> {
    if text.len() != 2 * WORD_HEX_LENGTH || !text.is_ascii() {
        return Err(Error::MalformedEncoding(format!(
            "expected {} hexadecimal characters, found \"{}\"", 2 * WORD_HEX_LENGTH, text,
        )));
    }

    let (numerator, denominator) = text.split_at(WORD_HEX_LENGTH);
    let numerator = Word::from_hex(numerator)?.to_signed();
    let denominator = Word::from_hex(denominator)?.to_unsigned();

    Rational::new(numerator, denominator)
}
