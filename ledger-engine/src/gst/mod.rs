//! GST Decomposition (商品及服务税拆分)
//!
//! Splits a GST-inclusive amount into its tax-exclusive base and two tax
//! halves (central + state share).
//!
//! ```text
//! tax   = round2(total − total × 100 / (100 + rate))
//! half1 = round2(tax / 2)
//! half2 = tax − half1
//! base  = total − tax
//! ```
//!
//! `base + half1 + half2 == total` holds exactly for every input. When
//! `tax` has an odd cent the second half absorbs it.

use crate::utils::money::round_money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::Receipt;
use shared::{AppError, AppResult, ErrorCode, Money};

/// Supported GST rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum GstRate {
    /// 1% (affordable housing)
    One,
    /// 5%
    Five,
}

impl GstRate {
    pub const SUPPORTED: [GstRate; 2] = [GstRate::One, GstRate::Five];

    /// Rate in percent
    pub const fn percent(&self) -> u32 {
        match self {
            Self::One => 1,
            Self::Five => 5,
        }
    }

    fn as_decimal(&self) -> Decimal {
        Decimal::from(self.percent())
    }
}

impl From<GstRate> for u32 {
    fn from(rate: GstRate) -> Self {
        rate.percent()
    }
}

impl TryFrom<u32> for GstRate {
    type Error = AppError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            5 => Ok(Self::Five),
            other => Err(AppError::with_message(
                ErrorCode::UnsupportedGstRate,
                format!("GST rate {}% is not supported (expected 1 or 5)", other),
            )
            .with_detail("rate", other)),
        }
    }
}

/// How unsupported rates are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GstRatePolicy {
    /// Reject unsupported rates
    #[default]
    Strict,
    /// Substitute the given rate (legacy behaviour)
    CoerceTo(GstRate),
}

impl GstRatePolicy {
    pub fn resolve(&self, rate: u32) -> AppResult<GstRate> {
        match (GstRate::try_from(rate), self) {
            (Ok(rate), _) => Ok(rate),
            (Err(err), Self::Strict) => Err(err),
            (Err(_), Self::CoerceTo(fallback)) => {
                tracing::warn!(
                    requested = rate,
                    substituted = fallback.percent(),
                    "Unsupported GST rate coerced"
                );
                Ok(*fallback)
            }
        }
    }
}

/// Result of splitting a GST-inclusive amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstBreakdown {
    /// Tax-exclusive amount
    pub base: Money,
    pub tax_half_1: Money,
    pub tax_half_2: Money,
}

impl GstBreakdown {
    pub fn tax_total(&self) -> Money {
        self.tax_half_1 + self.tax_half_2
    }

    /// base + both halves; equals the decomposed amount
    pub fn gross(&self) -> Money {
        self.base + self.tax_total()
    }
}

/// Split `total_inclusive` at `rate`
pub fn decompose(total_inclusive: Money, rate: GstRate) -> GstBreakdown {
    let hundred = Decimal::ONE_HUNDRED;
    let exclusive = total_inclusive * (hundred / (hundred + rate.as_decimal()));
    let tax = round_money(total_inclusive - exclusive);
    let tax_half_1 = round_money(tax / Decimal::TWO);

    GstBreakdown {
        base: total_inclusive - tax,
        tax_half_1,
        tax_half_2: tax - tax_half_1,
    }
}

/// Decompose a receipt's gross amount at its recorded rate
pub fn decompose_receipt(receipt: &Receipt, policy: GstRatePolicy) -> AppResult<GstBreakdown> {
    let rate = policy
        .resolve(receipt.gst_rate)
        .map_err(|e| e.with_detail("receipt_id", receipt.id))?;
    Ok(decompose(receipt.total_amount, rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reference_values_five_percent() {
        let b = decompose(dec!(2000), GstRate::Five);
        assert_eq!(b.base, dec!(1904.76));
        assert_eq!(b.tax_half_1, dec!(47.62));
        assert_eq!(b.tax_half_2, dec!(47.62));
    }

    #[test]
    fn test_reference_values_one_percent() {
        let b = decompose(dec!(2000), GstRate::One);
        assert_eq!(b.base, dec!(1980.20));
        assert_eq!(b.tax_half_1, dec!(9.90));
        assert_eq!(b.tax_half_2, dec!(9.90));
    }

    #[test]
    fn test_odd_cent_goes_to_second_half() {
        // 1.05 at 5% → tax 0.05
        let b = decompose(dec!(1.05), GstRate::Five);
        assert_eq!(b.tax_total(), dec!(0.05));
        assert_eq!(b.tax_half_1, dec!(0.03));
        assert_eq!(b.tax_half_2, dec!(0.02));
        assert_eq!(b.gross(), dec!(1.05));
    }

    #[test]
    fn test_zero_amount() {
        let b = decompose(Decimal::ZERO, GstRate::Five);
        assert!(b.base.is_zero());
        assert!(b.tax_total().is_zero());
    }

    #[test]
    fn test_rate_conversion() {
        assert_eq!(GstRate::try_from(1).unwrap(), GstRate::One);
        assert_eq!(GstRate::try_from(5).unwrap(), GstRate::Five);
        let err = GstRate::try_from(18).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnsupportedGstRate);
        assert_eq!(err.detail("rate").unwrap(), 18);
    }

    #[test]
    fn test_rate_serde() {
        assert_eq!(serde_json::to_string(&GstRate::Five).unwrap(), "5");
        let rate: GstRate = serde_json::from_str("1").unwrap();
        assert_eq!(rate, GstRate::One);
        assert!(serde_json::from_str::<GstRate>("12").is_err());
    }

    #[test]
    fn test_policy_strict_rejects() {
        let err = GstRatePolicy::Strict.resolve(12).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnsupportedGstRate);
        assert_eq!(GstRatePolicy::Strict.resolve(1).unwrap(), GstRate::One);
    }

    #[test]
    fn test_policy_coerce_substitutes() {
        let policy = GstRatePolicy::CoerceTo(GstRate::Five);
        assert_eq!(policy.resolve(12).unwrap(), GstRate::Five);
        assert_eq!(policy.resolve(1).unwrap(), GstRate::One);
    }

    #[test]
    fn test_decompose_receipt() {
        let receipt = Receipt {
            id: 77,
            sale_id: 1,
            amount: dec!(2000),
            total_amount: dec!(2000),
            gst_rate: 5,
            cleared: true,
            failed: false,
            created_at: 0,
        };
        let b = decompose_receipt(&receipt, GstRatePolicy::Strict).unwrap();
        assert_eq!(b.base, dec!(1904.76));

        let bad = Receipt {
            gst_rate: 7,
            ..receipt
        };
        let err = decompose_receipt(&bad, GstRatePolicy::Strict).unwrap_err();
        assert_eq!(err.detail("receipt_id").unwrap(), 77);
    }

    proptest! {
        /// base + half1 + half2 reproduces the input to the cent, for any
        /// amount with up to 2 decimal places.
        #[test]
        fn gst_round_trip(cents in 0i64..10_000_000_000, five in any::<bool>()) {
            let total = Decimal::new(cents, 2);
            let rate = if five { GstRate::Five } else { GstRate::One };
            let b = decompose(total, rate);
            prop_assert_eq!(b.base + b.tax_half_1 + b.tax_half_2, total);
            prop_assert!((b.tax_half_1 - b.tax_half_2).abs() <= dec!(0.01));
        }
    }
}
