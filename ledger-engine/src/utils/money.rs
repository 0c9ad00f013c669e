//! Money calculation utilities using rust_decimal for precision
//!
//! All amounts stay in `Decimal` end to end; nothing is converted to
//! binary floating point.

use rust_decimal::prelude::*;
use shared::Money;

/// Rounding strategy for monetary values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Round to 2 decimal places, half away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// `total × percent / 100`, unrounded
#[inline]
pub fn percent_of(total: Money, percent: Money) -> Money {
    total * (percent / Decimal::ONE_HUNDRED)
}

/// Sum an iterator of amounts
pub fn sum<'a>(amounts: impl IntoIterator<Item = &'a Money>) -> Money {
    amounts.into_iter().copied().sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rounding_half_up() {
        assert_eq!(round_money(dec!(0.005)), dec!(0.01));
        assert_eq!(round_money(dec!(0.004)), dec!(0.00));
        assert_eq!(round_money(dec!(-0.005)), dec!(-0.01));
        assert_eq!(round_money(dec!(95.238095)), dec!(95.24));
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(dec!(1000000), dec!(20)), dec!(200000));
        assert_eq!(percent_of(dec!(1000000), dec!(33.33)), dec!(333300));
        assert_eq!(percent_of(dec!(999), dec!(100)), dec!(999));
    }

    #[test]
    fn test_accumulation_precision() {
        // Sum 0.01 one thousand times
        let cents = vec![dec!(0.01); 1000];
        assert_eq!(sum(&cents), dec!(10.00));
    }
}
