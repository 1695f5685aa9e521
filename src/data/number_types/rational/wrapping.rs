//! # Operator implementations
//!
//! The field operations and the ordering, expressed through the `std::ops` and `std::cmp` traits.
//! Every operation is defined once on references and forwarded to from the owned variants; each
//! result passes through `Rational::reduce`.

/// Forward the owned and mixed variants of a binary operator to the `&Rational op &Rational` impl.
macro_rules! forward_binary {
    ($trait:ident, $method:ident) => {
        impl $trait<Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Self::Output {
                $trait::$method(&self, &rhs)
            }
        }

        impl $trait<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Self::Output {
                $trait::$method(&self, rhs)
            }
        }

        impl $trait<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Self::Output {
                $trait::$method(self, &rhs)
            }
        }
    };
}

mod creation {
    use num_bigint::BigInt;

    use crate::data::number_types::rational::Rational;

    impl From<BigInt> for Rational {
        fn from(value: BigInt) -> Self {
            Rational::reduce(value, BigInt::from(1))
        }
    }

    impl From<i64> for Rational {
        fn from(value: i64) -> Self {
            Self::from(BigInt::from(value))
        }
    }

    impl From<Rational> for (BigInt, BigInt) {
        fn from(value: Rational) -> Self {
            value.into_parts()
        }
    }
}

mod field {
    mod add {
        use std::iter::Sum;
        use std::ops::Add;

        use num_traits::Zero;

        use crate::data::number_types::rational::Rational;

        impl Add for &Rational {
            type Output = Rational;

            fn add(self, rhs: Self) -> Self::Output {
                Rational::reduce(
                    &self.numer * &rhs.denom + &rhs.numer * &self.denom,
                    &self.denom * &rhs.denom,
                )
            }
        }

        forward_binary!(Add, add);

        impl Sum for Rational {
            fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
                iter.fold(Rational::zero(), |total, item| total + item)
            }
        }
    }

    mod sub {
        use std::ops::Sub;

        use crate::data::number_types::rational::Rational;

        impl Sub for &Rational {
            type Output = Rational;

            fn sub(self, rhs: Self) -> Self::Output {
                Rational::reduce(
                    &self.numer * &rhs.denom - &rhs.numer * &self.denom,
                    &self.denom * &rhs.denom,
                )
            }
        }

        forward_binary!(Sub, sub);
    }

    mod mul {
        use std::ops::Mul;

        use crate::data::number_types::rational::Rational;

        impl Mul for &Rational {
            type Output = Rational;

            fn mul(self, rhs: Self) -> Self::Output {
                Rational::reduce(&self.numer * &rhs.numer, &self.denom * &rhs.denom)
            }
        }

        forward_binary!(Mul, mul);
    }

    mod neg {
        use std::ops::Neg;

        use crate::data::number_types::rational::Rational;

        impl Neg for Rational {
            type Output = Self;

            fn neg(self) -> Self::Output {
                // Negating the numerator keeps the form canonical.
                Self { numer: -self.numer, denom: self.denom }
            }
        }

        impl Neg for &Rational {
            type Output = Rational;

            fn neg(self) -> Self::Output {
                Neg::neg(self.clone())
            }
        }
    }

    mod identities {
        use num_bigint::BigInt;
        use num_traits::{One, Zero};

        use crate::data::number_types::rational::Rational;

        impl Zero for Rational {
            fn zero() -> Self {
                Self { numer: BigInt::zero(), denom: BigInt::one() }
            }

            fn is_zero(&self) -> bool {
                self.numer.is_zero()
            }
        }

        impl One for Rational {
            fn one() -> Self {
                Self { numer: BigInt::one(), denom: BigInt::one() }
            }

            fn is_one(&self) -> bool {
                self.numer.is_one() && self.denom.is_one()
            }
        }
    }
}

mod compare {
    use std::cmp::Ordering;

    use crate::data::number_types::rational::Rational;

    impl Ord for Rational {
        fn cmp(&self, other: &Self) -> Ordering {
            self.compare(other)
        }
    }

    impl PartialOrd for Rational {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.compare(other))
        }
    }
}
