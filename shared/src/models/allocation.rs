//! Allocation Result Model
//!
//! Derived per sale, never stored.

use crate::types::{Money, Timestamp};
use serde::{Deserialize, Serialize};

/// Payment state of one installment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstallmentStatus {
    Paid,
    Partial,
    Unpaid,
}

/// Waterfall outcome for one installment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentAllocation {
    pub installment_id: i64,
    /// Installment name, so aggregation can label rows it has no installment for
    #[serde(default)]
    pub name: String,
    /// Amount due for this installment (sale total × percent / 100)
    pub due: Money,
    pub paid: Money,
    pub remaining: Money,
    /// Concrete due date, only for WITHIN_DAYS installments
    #[serde(default)]
    pub due_date: Option<Timestamp>,
}

impl InstallmentAllocation {
    pub fn status(&self) -> InstallmentStatus {
        if self.remaining.is_zero() {
            InstallmentStatus::Paid
        } else if self.paid > Money::ZERO {
            InstallmentStatus::Partial
        } else {
            InstallmentStatus::Unpaid
        }
    }

    pub fn is_fully_paid(&self) -> bool {
        self.remaining.is_zero()
    }
}

/// Allocation of a sale's cleared receipts over its installments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub sale_id: i64,
    /// Σ installment due
    pub total_due: Money,
    /// Σ cleared, non-failed receipt amounts
    pub total_paid: Money,
    /// total_due − total_paid, floored at zero
    pub total_remaining: Money,
    /// One row per applicable installment, in canonical order
    pub per_installment: Vec<InstallmentAllocation>,
}

impl AllocationResult {
    /// Zero-valued result for degenerate inputs
    pub fn empty(sale_id: i64) -> Self {
        Self {
            sale_id,
            total_due: Money::ZERO,
            total_paid: Money::ZERO,
            total_remaining: Money::ZERO,
            per_installment: Vec::new(),
        }
    }

    /// Σ paid through the waterfall (≤ total_paid)
    pub fn allocated(&self) -> Money {
        self.per_installment.iter().map(|row| row.paid).sum()
    }

    pub fn installment(&self, installment_id: i64) -> Option<&InstallmentAllocation> {
        self.per_installment
            .iter()
            .find(|row| row.installment_id == installment_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(due: Money, paid: Money) -> InstallmentAllocation {
        InstallmentAllocation {
            installment_id: 1,
            name: "Booking".into(),
            due,
            paid,
            remaining: due - paid,
            due_date: None,
        }
    }

    #[test]
    fn test_installment_status() {
        assert_eq!(row(dec!(100), dec!(100)).status(), InstallmentStatus::Paid);
        assert_eq!(row(dec!(100), dec!(40)).status(), InstallmentStatus::Partial);
        assert_eq!(row(dec!(100), dec!(0)).status(), InstallmentStatus::Unpaid);
    }

    #[test]
    fn test_empty_result() {
        let result = AllocationResult::empty(42);
        assert_eq!(result.sale_id, 42);
        assert!(result.total_due.is_zero());
        assert!(result.allocated().is_zero());
        assert!(result.installment(1).is_none());
    }

    #[test]
    fn test_money_fields_serialize_as_strings() {
        let json = serde_json::to_value(row(dec!(200000.00), dec!(150000))).unwrap();
        assert_eq!(json["due"], "200000.00");
        assert_eq!(json["remaining"], "50000.00");
    }
}
