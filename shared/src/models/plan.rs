//! Payment Plan Model (付款计划)
//!
//! Two shapes exist side by side:
//! - [`PaymentPlanRatio`]: an ordered, 100%-summing group of [`Installment`]s
//!   chosen for a sale.
//! - [`PaymentPlan`]: the standalone per-society list, each plan either
//!   applying directly to every sale or only to towers it was activated for.
//!
//! Both are flattened into [`Installment`]s before allocation.

use crate::types::{Money, Timestamp};
use serde::{Deserialize, Serialize};

/// Level an installment applies at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstallmentScope {
    Sale,
    Tower,
    Flat,
}

impl InstallmentScope {
    /// Sale-level installments form the direct group, ordered before
    /// tower/flat-activated ones
    pub fn is_direct(&self) -> bool {
        matches!(self, Self::Sale)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sale => "SALE",
            Self::Tower => "TOWER",
            Self::Flat => "FLAT",
        }
    }
}

/// Trigger condition of an installment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionType {
    OnBooking,
    OnAllotment,
    /// Due `condition_value` days after booking
    WithinDays,
    OnTowerStage,
    OnFlatStage,
}

impl ConditionType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::OnBooking => "ON_BOOKING",
            Self::OnAllotment => "ON_ALLOTMENT",
            Self::WithinDays => "WITHIN_DAYS",
            Self::OnTowerStage => "ON_TOWER_STAGE",
            Self::OnFlatStage => "ON_FLAT_STAGE",
        }
    }
}

/// One percentage-based portion of a sale's total price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installment {
    pub id: i64,
    /// Display name (e.g. "On Booking", "Slab 3")
    #[serde(default)]
    pub name: String,
    /// Share of the sale total, in percent (0 < percent <= 100)
    pub percent: Money,
    pub scope: InstallmentScope,
    pub condition_type: ConditionType,
    /// Days for WITHIN_DAYS, stage reference for stage triggers
    #[serde(default)]
    pub condition_value: Option<i64>,
    pub created_at: Timestamp,
    /// Ratio this item belongs to; `None` for standalone plans
    #[serde(default)]
    pub source_ratio_id: Option<i64>,
}

/// An ordered group of installments summing to exactly 100%
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPlanRatio {
    pub id: i64,
    pub society_id: i64,
    pub name: String,
    pub items: Vec<Installment>,
    pub created_at: Timestamp,
}

impl PaymentPlanRatio {
    /// Sum of item percentages
    pub fn total_percent(&self) -> Money {
        self.items.iter().map(|i| i.percent).sum()
    }
}

/// Create ratio payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioDraft {
    pub society_id: i64,
    pub name: String,
    pub items: Vec<InstallmentDraft>,
}

/// Create installment payload (item of a [`RatioDraft`])
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallmentDraft {
    #[serde(default)]
    pub name: String,
    pub percent: Money,
    pub scope: InstallmentScope,
    pub condition_type: ConditionType,
    #[serde(default)]
    pub condition_value: Option<i64>,
}

/// Scope of a standalone payment plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanScope {
    /// Applies to every sale in the society
    Direct,
    /// Applies only to towers it has been activated for
    Tower,
}

/// Standalone payment plan (one row per plan, scoped per society)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPlan {
    pub id: i64,
    pub society_id: i64,
    pub name: String,
    pub scope: PlanScope,
    pub percent: Money,
    pub condition_type: ConditionType,
    #[serde(default)]
    pub condition_value: Option<i64>,
    pub created_at: Timestamp,
}

impl PaymentPlan {
    /// Flatten into an installment for allocation
    pub fn to_installment(&self) -> Installment {
        Installment {
            id: self.id,
            name: self.name.clone(),
            percent: self.percent,
            scope: match self.scope {
                PlanScope::Direct => InstallmentScope::Sale,
                PlanScope::Tower => InstallmentScope::Tower,
            },
            condition_type: self.condition_type,
            condition_value: self.condition_value,
            created_at: self.created_at,
            source_ratio_id: None,
        }
    }
}

/// Activation of a tower-scoped plan for one tower
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TowerPlanActivation {
    pub plan_id: i64,
    pub tower_id: i64,
    pub activated_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_scope_serde() {
        let json = serde_json::to_string(&InstallmentScope::Tower).unwrap();
        assert_eq!(json, "\"TOWER\"");
        let ct: ConditionType = serde_json::from_str("\"WITHIN_DAYS\"").unwrap();
        assert_eq!(ct, ConditionType::WithinDays);
        assert_eq!(ConditionType::OnFlatStage.name(), "ON_FLAT_STAGE");
    }

    #[test]
    fn test_percent_serializes_as_string() {
        let item = Installment {
            id: 1,
            name: "Booking".into(),
            percent: dec!(12.5),
            scope: InstallmentScope::Sale,
            condition_type: ConditionType::OnBooking,
            condition_value: None,
            created_at: 0,
            source_ratio_id: Some(3),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["percent"], "12.5");
    }

    #[test]
    fn test_plan_to_installment_maps_scope() {
        let plan = PaymentPlan {
            id: 9,
            society_id: 1,
            name: "Plinth".into(),
            scope: PlanScope::Tower,
            percent: dec!(10),
            condition_type: ConditionType::OnTowerStage,
            condition_value: Some(2),
            created_at: 100,
        };
        let item = plan.to_installment();
        assert_eq!(item.id, 9);
        assert_eq!(item.scope, InstallmentScope::Tower);
        assert!(!item.scope.is_direct());
        assert_eq!(item.source_ratio_id, None);

        let direct = PaymentPlan {
            scope: PlanScope::Direct,
            ..plan
        };
        assert!(direct.to_installment().scope.is_direct());
    }
}
