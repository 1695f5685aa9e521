/// Shorthand for creating a rational number in tests.
///
/// Panics on a zero denominator.
#[macro_export]
macro_rules! RB {
    ($value:expr) => {
        $crate::data::number_types::rational::Rational::from($value as i64)
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::Rational::from_i64($numer, $denom).unwrap()
    };
}
