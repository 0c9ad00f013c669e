use super::{BreakdownTable, FlatAllocation};
use shared::Money;
use shared::models::{Installment, TowerReport, Totals};

/// Aggregate the flats of one tower
///
/// Only sold flats contribute. A flat lands in an installment's paid
/// bucket iff its remaining for that installment is exactly zero; flats
/// whose allocation has no row for the installment appear in neither.
pub fn aggregate_tower(
    tower_id: i64,
    flats: &[FlatAllocation],
    installments: &[Installment],
) -> TowerReport {
    let mut table = BreakdownTable::seeded(installments);
    let mut sale_total = Money::ZERO;
    let mut cash_paid = Money::ZERO;
    let mut plan_total = Money::ZERO;
    let mut plan_paid = Money::ZERO;
    let mut sold_flat_count = 0;

    for flat in flats {
        let Some(allocation) = flat.allocation.as_ref().filter(|_| flat.is_sold()) else {
            continue;
        };
        sold_flat_count += 1;
        sale_total += flat.sale_total;
        cash_paid += allocation.total_paid;
        plan_total += allocation.total_due;

        for row in &allocation.per_installment {
            plan_paid += row.paid;

            let entry = table.row_mut(row.installment_id, &row.name);
            entry.total += row.due;
            entry.paid += row.paid;
            entry.remaining += row.remaining;
            if row.remaining.is_zero() {
                entry.paid_flat_ids.push(flat.flat_id);
            } else {
                entry.unpaid_flat_ids.push(flat.flat_id);
            }
        }
    }

    let report = TowerReport {
        tower_id,
        flat_count: flats.len(),
        sold_flat_count,
        overall: Totals::new(sale_total, cash_paid),
        payment_plan: Totals::new(plan_total, plan_paid),
        breakdown: table.into_rows(),
    };

    tracing::debug!(
        tower_id,
        flats = report.flat_count,
        sold = report.sold_flat_count,
        total = %report.overall.total,
        paid = %report.overall.paid,
        "Tower aggregated"
    );
    report
}
