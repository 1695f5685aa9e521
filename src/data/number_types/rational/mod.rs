//! # Rational numbers
//!
//! An exact fraction of two arbitrary precision integers, always kept in lowest terms with a
//! strictly positive denominator. Values are never mutated by the arithmetic; each operation
//! constructs a new, canonical value.
use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::io::error::{Error, Result};

mod wrapping;
mod macros;

/// An arbitrary precision rational number in canonical form.
///
/// Because the representation is unique, structural equality and hashing coincide with equality of
/// the values.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Create a new instance in lowest terms.
    ///
    /// The common factor of the numerator and denominator is divided out and, if needed, both are
    /// negated such that the denominator is positive.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when the denominator is zero.
    pub fn new(numer: BigInt, denom: BigInt) -> Result<Self> {
        if denom.is_zero() {
            return Err(Error::DivisionByZero);
        }

        Ok(Self::reduce(numer, denom))
    }

    /// Bring a numerator and non-zero denominator into canonical form.
    fn reduce(numer: BigInt, denom: BigInt) -> Self {
        debug_assert!(!denom.is_zero());

        // gcd(0, d) = |d|, so zero always ends up as 0/1.
        let gcd = numer.gcd(&denom);
        let (mut numer, mut denom) = if gcd.is_one() {
            (numer, denom)
        } else {
            (numer / &gcd, denom / &gcd)
        };
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        log::trace!("reduced to {}/{} (common factor {})", numer, denom, gcd);

        Self { numer, denom }
    }

    /// Create a new instance from machine integers.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when the denominator is zero.
    pub fn from_i64(numer: i64, denom: i64) -> Result<Self> {
        Self::new(numer.into(), denom.into())
    }

    /// Signed numerator, carries the sign of the value.
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// Denominator, always positive.
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Split into the numerator and the denominator.
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numer, self.denom)
    }

    /// Whether this value is an integer.
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// `-1`, `0` or `1` depending on the sign of this value.
    pub fn signum(&self) -> BigInt {
        self.numer.signum()
    }

    /// Quotient of two values.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when `other` is zero.
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }

        Ok(Self::reduce(&self.numer * &other.denom, &self.denom * &other.numer))
    }

    /// Order two values exactly by cross multiplication.
    ///
    /// Both denominators are positive, so comparing `a/b` with `c/d` is comparing `a * d` with
    /// `c * b`.
    pub fn compare(&self, other: &Self) -> Ordering {
        if self.denom == other.denom {
            return self.numer.cmp(&other.numer);
        }

        (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}
