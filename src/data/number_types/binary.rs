//! # Binary data
//!
//! A number type that is either zero or one, the value of a comparison.
use std::fmt;
use std::ops::Not;

use num_bigint::BigInt;

/// A binary data type.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
#[allow(missing_docs)]
pub enum Binary {
    Zero,
    One,
}

impl From<bool> for Binary {
    fn from(value: bool) -> Self {
        if value { Binary::One } else { Binary::Zero }
    }
}

impl From<Binary> for bool {
    fn from(value: Binary) -> Self {
        value == Binary::One
    }
}

impl From<Binary> for BigInt {
    fn from(value: Binary) -> Self {
        match value {
            Binary::Zero => BigInt::from(0),
            Binary::One => BigInt::from(1),
        }
    }
}

impl Not for Binary {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Binary::Zero => Binary::One,
            Binary::One => Binary::Zero,
        }
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Binary::Zero => "0",
            Binary::One => "1",
        })
    }
}
