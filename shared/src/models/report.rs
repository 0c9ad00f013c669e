//! Collection Report Models (塔楼/小区报表)

use crate::types::Money;
use serde::{Deserialize, Serialize};

/// total / paid / remaining triple
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub total: Money,
    pub paid: Money,
    pub remaining: Money,
}

impl Totals {
    /// `remaining` is floored at zero; overpayment is not modelled
    pub fn new(total: Money, paid: Money) -> Self {
        Self {
            total,
            paid,
            remaining: (total - paid).max(Money::ZERO),
        }
    }

    /// Sum of two triples, recomputing `remaining` from the summed figures
    pub fn merge(&self, other: &Totals) -> Self {
        Self::new(self.total + other.total, self.paid + other.paid)
    }
}

/// Per-installment row of a tower/society report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentBreakdown {
    pub installment_id: i64,
    #[serde(default)]
    pub name: String,
    pub total: Money,
    pub paid: Money,
    pub remaining: Money,
    /// Flats whose remaining for this installment is exactly zero
    pub paid_flat_ids: Vec<i64>,
    pub unpaid_flat_ids: Vec<i64>,
}

impl InstallmentBreakdown {
    pub fn new(installment_id: i64, name: impl Into<String>) -> Self {
        Self {
            installment_id,
            name: name.into(),
            total: Money::ZERO,
            paid: Money::ZERO,
            remaining: Money::ZERO,
            paid_flat_ids: Vec::new(),
            unpaid_flat_ids: Vec::new(),
        }
    }

    /// Fold another row for the same installment into this one
    pub fn absorb(&mut self, other: &InstallmentBreakdown) {
        self.total += other.total;
        self.paid += other.paid;
        self.remaining += other.remaining;
        self.paid_flat_ids.extend_from_slice(&other.paid_flat_ids);
        self.unpaid_flat_ids.extend_from_slice(&other.unpaid_flat_ids);
    }
}

/// Tower-level collection report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TowerReport {
    pub tower_id: i64,
    /// Flats passed to the aggregation
    pub flat_count: usize,
    /// Flats with a sale and a positive total
    pub sold_flat_count: usize,
    /// Sale prices vs cleared payments, independent of installments
    pub overall: Totals,
    /// Installment totals vs amounts paid through the waterfall
    pub payment_plan: Totals,
    pub breakdown: Vec<InstallmentBreakdown>,
}

/// Society-level collection report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocietyReport {
    pub society_id: i64,
    pub overall: Totals,
    pub payment_plan: Totals,
    pub breakdown: Vec<InstallmentBreakdown>,
    pub towers: Vec<TowerReport>,
}

impl SocietyReport {
    /// Overall and PaymentPlan totals disagree (installments not
    /// covering the full sale price, or overpayment)
    pub fn totals_diverge(&self) -> bool {
        self.overall.total != self.payment_plan.total
            || self.overall.paid != self.payment_plan.paid
    }
}
