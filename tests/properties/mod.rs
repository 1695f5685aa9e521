//! # Algebraic properties
//!
//! Laws that hold for all inputs, checked on randomly generated operands.
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use proptest::prelude::*;

use fraction_abi::io::abi::{Encode, decode};
use fraction_abi::operation::{Comparison, OperationSet, run};
use fraction_abi::{Binary, Rational};

/// Generators for operands.
mod generators {
    use super::*;

    /// Integers well outside of the machine word range, including zero and negative values.
    pub fn arb_integer() -> impl Strategy<Value = BigInt> {
        prop_oneof![
            any::<i64>().prop_map(BigInt::from),
            (any::<i64>(), any::<u64>(), any::<u64>()).prop_map(|(high, middle, low)| {
                ((BigInt::from(high) << 128usize) + (BigInt::from(middle) << 64usize)) + BigInt::from(low)
            }),
            (-20_i64..20).prop_map(BigInt::from),
        ]
    }

    /// Nonzero integers.
    pub fn arb_nonzero() -> impl Strategy<Value = BigInt> {
        arb_integer().prop_filter("A denominator is nonzero", |value| !value.is_zero())
    }

    /// Rationals built from unreduced pairs.
    pub fn arb_rational() -> impl Strategy<Value = Rational> {
        (arb_integer(), arb_nonzero()).prop_map(|(numer, denom)| Rational::new(numer, denom).unwrap())
    }
}

use generators::*;

proptest! {
    #[test]
    fn reduction(numer in arb_integer(), denom in arb_nonzero()) {
        let value = Rational::new(numer.clone(), denom.clone()).unwrap();
        prop_assert!(value.denom().is_positive());
        prop_assert!(value.numer().gcd(value.denom()).is_one());
        // Same value as the unreduced pair.
        prop_assert_eq!(value.numer() * &denom, numer * value.denom());
    }

    #[test]
    fn zero(denom in arb_nonzero()) {
        let value = Rational::new(BigInt::zero(), denom).unwrap();
        prop_assert_eq!(value.into_parts(), (BigInt::zero(), BigInt::one()));
    }

    #[test]
    fn commutativity(x in arb_rational(), y in arb_rational()) {
        prop_assert_eq!(&x + &y, &y + &x);
        prop_assert_eq!(&x * &y, &y * &x);
    }

    #[test]
    fn inverses(x in arb_rational(), y in arb_rational()) {
        prop_assert_eq!(&(&x + &y) - &y, x.clone());
        if !y.is_zero() {
            prop_assert_eq!((&x * &y).checked_div(&y).unwrap(), x);
        }
    }

    #[test]
    fn encoding_round_trip(x in arb_rational()) {
        let text = x.encode().unwrap().to_string();
        prop_assert_eq!(text.len(), 128);
        prop_assert_eq!(decode(&text).unwrap(), x);
    }

    #[test]
    fn comparison_consistency(x in arb_rational(), y in arb_rational()) {
        let holds = |comparison: Comparison| bool::from(comparison.apply(&x, &y));

        let (lt, eq, gt) = (holds(Comparison::Lt), holds(Comparison::Eq), holds(Comparison::Gt));
        prop_assert_eq!([lt, eq, gt].iter().filter(|&&value| value).count(), 1);
        prop_assert_eq!(holds(Comparison::Neq), !eq);
        prop_assert_eq!(holds(Comparison::Lte), lt || eq);
        prop_assert_eq!(holds(Comparison::Gte), gt || eq);
        prop_assert_eq!(lt, x < y);
        prop_assert_eq!(eq, x == y);
    }

    #[test]
    fn comparison_encoding(x in arb_rational(), y in arb_rational()) {
        let expected = Binary::from(x <= y).encode().unwrap().to_string();
        let texts = [x.numer(), x.denom(), y.numer(), y.denom()].map(BigInt::to_string);
        let operands = [texts[0].as_str(), texts[1].as_str(), texts[2].as_str(), texts[3].as_str()];
        prop_assert_eq!(run(OperationSet::Full, "lte", operands).unwrap(), expected);
    }
}
