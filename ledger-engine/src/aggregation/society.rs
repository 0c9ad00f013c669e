use super::BreakdownTable;
use shared::models::{Installment, SocietyReport, TowerReport, Totals};

/// Fold tower reports into a society report
///
/// Same algorithm as [`super::aggregate_tower`] one level up: tower rows
/// are matched by installment id and summed. The towers are kept in the
/// result.
pub fn aggregate_society(
    society_id: i64,
    towers: Vec<TowerReport>,
    installments: &[Installment],
) -> SocietyReport {
    let mut table = BreakdownTable::seeded(installments);
    let mut overall = Totals::default();
    let mut payment_plan = Totals::default();

    for tower in &towers {
        overall = overall.merge(&tower.overall);
        payment_plan = payment_plan.merge(&tower.payment_plan);
        for row in &tower.breakdown {
            table.row_mut(row.installment_id, &row.name).absorb(row);
        }
    }

    let report = SocietyReport {
        society_id,
        overall,
        payment_plan,
        breakdown: table.into_rows(),
        towers,
    };

    if report.totals_diverge() {
        tracing::info!(
            society_id,
            overall_total = %report.overall.total,
            plan_total = %report.payment_plan.total,
            "Overall and payment plan totals differ"
        );
    }
    report
}
