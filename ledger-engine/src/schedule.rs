//! Demand schedule (缴款通知)
//!
//! Turns a sale and its installments into dated, GST-inclusive demands.
//! Each line is rounded to the cent and the last line absorbs the rounding
//! difference, so the lines always sum to the rounded plan total.

use crate::gst::{GstBreakdown, GstRate, decompose};
use crate::plans::{canonical_refs, compute_due};
use crate::utils::money::{percent_of, round_money};
use serde::{Deserialize, Serialize};
use shared::models::{ConditionType, Installment, Sale};
use shared::{Money, Timestamp};

/// One demand raised against a sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandLine {
    pub installment_id: i64,
    pub name: String,
    pub condition_type: ConditionType,
    /// GST-inclusive amount
    pub amount: Money,
    pub due_date: Option<Timestamp>,
    pub gst: GstBreakdown,
}

/// Demand lines for `sale`, in canonical installment order
pub fn demand_schedule(sale: &Sale, installments: &[Installment], rate: GstRate) -> Vec<DemandLine> {
    demand_schedule_with(sale, installments, rate, |_| None)
}

/// [`demand_schedule`] with the same activation lookup as
/// [`crate::allocation::allocate_with`], so due dates agree
pub fn demand_schedule_with<F>(
    sale: &Sale,
    installments: &[Installment],
    rate: GstRate,
    activated_at: F,
) -> Vec<DemandLine>
where
    F: Fn(&Installment) -> Option<Timestamp>,
{
    if !sale.has_positive_total() || installments.is_empty() {
        return Vec::new();
    }

    let ordered = canonical_refs(installments);
    let plan_total = round_money(
        ordered
            .iter()
            .map(|i| percent_of(sale.total_price, i.percent))
            .sum(),
    );

    let last = ordered.len() - 1;
    let mut raised = Money::ZERO;
    ordered
        .into_iter()
        .enumerate()
        .map(|(index, installment)| {
            let amount = if index == last {
                plan_total - raised
            } else {
                round_money(percent_of(sale.total_price, installment.percent))
            };
            raised += amount;

            DemandLine {
                installment_id: installment.id,
                name: installment.name.clone(),
                condition_type: installment.condition_type,
                amount,
                due_date: compute_due(installment, sale, activated_at(installment)),
                gst: decompose(amount, rate),
            }
        })
        .collect()
}
