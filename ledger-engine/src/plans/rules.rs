//! Ratio validation rules
//!
//! The permitted scope/condition pairings are a fixed table. A
//! [`ValidationRules`] value is built by the caller and passed into plan
//! creation; there is no global registry.

use rust_decimal::Decimal;
use shared::models::{
    ConditionType, Installment, InstallmentDraft, InstallmentScope, PaymentPlanRatio, RatioDraft,
};
use shared::util::{now_millis, snowflake_id, snowflake_ids};
use shared::{AppError, AppResult, ErrorCode, Money};

/// Standard pairing table
///
/// - SALE: on booking, within N days, on allotment
/// - TOWER: on tower stage
/// - FLAT: on flat stage
pub const STANDARD_PAIRINGS: &[(InstallmentScope, ConditionType)] = &[
    (InstallmentScope::Sale, ConditionType::OnBooking),
    (InstallmentScope::Sale, ConditionType::WithinDays),
    (InstallmentScope::Sale, ConditionType::OnAllotment),
    (InstallmentScope::Tower, ConditionType::OnTowerStage),
    (InstallmentScope::Flat, ConditionType::OnFlatStage),
];

/// Fields validation needs from a plan item
pub trait PlanItem {
    fn percent(&self) -> Money;
    fn scope(&self) -> InstallmentScope;
    fn condition_type(&self) -> ConditionType;
    fn condition_value(&self) -> Option<i64>;
}

impl PlanItem for Installment {
    fn percent(&self) -> Money {
        self.percent
    }
    fn scope(&self) -> InstallmentScope {
        self.scope
    }
    fn condition_type(&self) -> ConditionType {
        self.condition_type
    }
    fn condition_value(&self) -> Option<i64> {
        self.condition_value
    }
}

impl PlanItem for InstallmentDraft {
    fn percent(&self) -> Money {
        self.percent
    }
    fn scope(&self) -> InstallmentScope {
        self.scope
    }
    fn condition_type(&self) -> ConditionType {
        self.condition_type
    }
    fn condition_value(&self) -> Option<i64> {
        self.condition_value
    }
}

/// Ratio validation rules
#[derive(Debug, Clone, Copy)]
pub struct ValidationRules {
    pairings: &'static [(InstallmentScope, ConditionType)],
}

impl ValidationRules {
    /// Rules with the [`STANDARD_PAIRINGS`] table
    pub const fn standard() -> Self {
        Self {
            pairings: STANDARD_PAIRINGS,
        }
    }

    /// Rules with a custom pairing table
    pub const fn with_pairings(pairings: &'static [(InstallmentScope, ConditionType)]) -> Self {
        Self { pairings }
    }

    pub fn allows(&self, scope: InstallmentScope, condition_type: ConditionType) -> bool {
        self.pairings
            .iter()
            .any(|&(s, c)| s == scope && c == condition_type)
    }

    /// Validate a whole ratio; the first violation rejects all items
    pub fn validate_ratio<T: PlanItem>(&self, items: &[T]) -> AppResult<()> {
        if items.is_empty() {
            return Err(AppError::new(ErrorCode::RatioEmpty));
        }

        for (index, item) in items.iter().enumerate() {
            self.validate_item(item)
                .map_err(|e| e.with_detail("index", index))?;
        }

        let sum: Money = items.iter().map(|item| item.percent()).sum();
        if sum != Decimal::ONE_HUNDRED {
            return Err(AppError::with_message(
                ErrorCode::RatioTotalMismatch,
                format!("Installment percentages sum to {}, expected exactly 100", sum),
            )
            .with_detail("sum", sum.to_string()));
        }
        Ok(())
    }

    /// Percent range, pairing and condition value of a single item
    pub fn validate_item<T: PlanItem>(&self, item: &T) -> AppResult<()> {
        validate_percent(item.percent())?;

        let (scope, condition_type) = (item.scope(), item.condition_type());
        if !self.allows(scope, condition_type) {
            return Err(AppError::with_message(
                ErrorCode::InvalidScopeCondition,
                format!(
                    "Condition {} is not allowed for scope {}",
                    condition_type.name(),
                    scope.name()
                ),
            )
            .with_detail("scope", scope.name())
            .with_detail("condition_type", condition_type.name()));
        }

        if condition_type == ConditionType::WithinDays {
            match item.condition_value() {
                Some(days) if days > 0 => {}
                other => {
                    return Err(AppError::new(ErrorCode::InvalidConditionValue)
                        .with_detail("condition_value", other));
                }
            }
        }
        Ok(())
    }
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self::standard()
    }
}

/// 0 < percent <= 100
pub fn validate_percent(percent: Money) -> AppResult<()> {
    if percent <= Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
        return Err(AppError::with_message(
            ErrorCode::InvalidPercentage,
            format!("Percentage must be in (0, 100], got {}", percent),
        )
        .with_detail("percent", percent.to_string()));
    }
    Ok(())
}

/// Validate a draft and materialise it as a ratio
///
/// Nothing is produced unless every item passes.
pub fn create_ratio(rules: &ValidationRules, draft: RatioDraft) -> AppResult<PaymentPlanRatio> {
    rules.validate_ratio(&draft.items)?;

    let ratio_id = snowflake_id();
    let created_at = now_millis();
    let item_ids = snowflake_ids(draft.items.len());
    let items = draft
        .items
        .into_iter()
        .zip(item_ids)
        .map(|(item, id)| Installment {
            id,
            name: item.name,
            percent: item.percent,
            scope: item.scope,
            condition_type: item.condition_type,
            condition_value: item.condition_value,
            created_at,
            source_ratio_id: Some(ratio_id),
        })
        .collect::<Vec<_>>();

    tracing::debug!(ratio_id, items = items.len(), "Payment plan ratio created");

    Ok(PaymentPlanRatio {
        id: ratio_id,
        society_id: draft.society_id,
        name: draft.name,
        items,
        created_at,
    })
}
