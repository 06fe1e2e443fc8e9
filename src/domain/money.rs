use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::str::FromStr;

/// A fixed-point monetary value read from a receipt field.
///
/// Wraps `rust_decimal::Decimal` so the scoring rules never touch binary
/// floating point: `9.48 % 0.25` is computed exactly.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Money(Decimal);

impl Money {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Parses a textual amount such as `"9.48"`.
    ///
    /// Surrounding whitespace is ignored. Returns `None` for anything that is
    /// not a plain decimal number.
    pub fn parse(text: &str) -> Option<Self> {
        Decimal::from_str(text.trim()).ok().map(Self)
    }

    /// True when the amount has no cents.
    pub fn is_whole(&self) -> bool {
        self.0.fract().is_zero()
    }

    /// True when the amount is an exact multiple of `step`.
    pub fn is_multiple_of(&self, step: Decimal) -> bool {
        !step.is_zero() && (self.0 % step).is_zero()
    }

    /// `ceil(amount * rate)` as an integer, or `None` if it does not fit.
    pub fn ceil_scaled(&self, rate: Decimal) -> Option<i64> {
        self.0.checked_mul(rate)?.ceil().to_i64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("9.48"), Some(Money::new(dec!(9.48))));
        assert_eq!(Money::parse(" 12.00 "), Some(Money::new(dec!(12.00))));
        assert_eq!(Money::parse("abc"), None);
        assert_eq!(Money::parse(""), None);
    }

    #[test]
    fn test_is_whole() {
        assert!(Money::new(dec!(12.00)).is_whole());
        assert!(Money::new(dec!(0.00)).is_whole());
        assert!(!Money::new(dec!(9.48)).is_whole());
    }

    #[test]
    fn test_is_multiple_of_quarter() {
        assert!(Money::new(dec!(12.00)).is_multiple_of(dec!(0.25)));
        assert!(Money::new(dec!(35.75)).is_multiple_of(dec!(0.25)));
        assert!(!Money::new(dec!(9.48)).is_multiple_of(dec!(0.25)));
        assert!(!Money::new(dec!(1.00)).is_multiple_of(Decimal::ZERO));
    }

    #[test]
    fn test_ceil_scaled() {
        assert_eq!(Money::new(dec!(12.25)).ceil_scaled(dec!(0.2)), Some(3));
        assert_eq!(Money::new(dec!(12.00)).ceil_scaled(dec!(0.2)), Some(3));
        assert_eq!(Money::new(dec!(5.00)).ceil_scaled(dec!(0.2)), Some(1));
        assert_eq!(Money::new(dec!(0.00)).ceil_scaled(dec!(0.2)), Some(0));
        assert_eq!(Money::new(dec!(0.01)).ceil_scaled(dec!(0.2)), Some(1));
    }
}
