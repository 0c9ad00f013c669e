//! Allocation Engine (收款分摊)
//!
//! Distributes a sale's cleared cash over its installments as a
//! waterfall: installments are filled one at a time in canonical order,
//! each consuming as much of the remaining cash as it is due.
//!
//! Allocation is a pure function of its inputs. It never errors; degenerate
//! inputs produce zero-valued rows so that report generation never aborts.

use crate::plans::{canonical_refs, compute_due};
use crate::receipts::usable_total;
use crate::utils::money::percent_of;
use shared::models::{AllocationResult, Installment, InstallmentAllocation, Receipt, Sale};
use shared::{Money, Timestamp};

/// Allocate `receipts` over `installments` for `sale`
pub fn allocate(sale: &Sale, installments: &[Installment], receipts: &[Receipt]) -> AllocationResult {
    allocate_with(sale, installments, receipts, |_| None)
}

/// [`allocate`] with a lookup for tower activation times, used for
/// due dates of activated WITHIN_DAYS installments
pub fn allocate_with<F>(
    sale: &Sale,
    installments: &[Installment],
    receipts: &[Receipt],
    activated_at: F,
) -> AllocationResult
where
    F: Fn(&Installment) -> Option<Timestamp>,
{
    if !sale.has_positive_total() {
        tracing::warn!(
            sale_id = sale.id,
            total_price = %sale.total_price,
            "Sale total is not positive; allocation skipped"
        );
        return AllocationResult::empty(sale.id);
    }

    let total_paid = usable_total(receipts);
    let mut remaining_cash = total_paid;
    let mut total_due = Money::ZERO;
    let mut per_installment = Vec::with_capacity(installments.len());

    for installment in canonical_refs(installments) {
        let due = percent_of(sale.total_price, installment.percent);
        let paid = if remaining_cash >= due {
            due
        } else if remaining_cash > Money::ZERO {
            remaining_cash
        } else {
            Money::ZERO
        };
        remaining_cash -= paid;
        total_due += due;

        per_installment.push(InstallmentAllocation {
            installment_id: installment.id,
            name: installment.name.clone(),
            due,
            paid,
            remaining: due - paid,
            due_date: compute_due(installment, sale, activated_at(installment)),
        });
    }

    if !installments.is_empty() && total_due != sale.total_price {
        tracing::warn!(
            sale_id = sale.id,
            total_due = %total_due,
            total_price = %sale.total_price,
            "Installments do not cover the sale total"
        );
    }
    if remaining_cash > Money::ZERO {
        tracing::warn!(
            sale_id = sale.id,
            unallocated = %remaining_cash,
            "Cleared receipts exceed installment dues; excess left unallocated"
        );
    }

    tracing::debug!(
        sale_id = sale.id,
        installments = per_installment.len(),
        total_due = %total_due,
        total_paid = %total_paid,
        "Sale allocated"
    );

    AllocationResult {
        sale_id: sale.id,
        total_due,
        total_paid,
        total_remaining: (total_due - total_paid).max(Money::ZERO),
        per_installment,
    }
}
