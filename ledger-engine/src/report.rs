//! Society report builder
//!
//! Orchestrates the engine over a [`SocietySnapshot`]: resolve each sale's
//! installments, allocate, aggregate per tower, fold to the society.

use crate::aggregation::{FlatAllocation, aggregate_society, aggregate_tower};
use crate::allocation::allocate_with;
use crate::gst::{GstBreakdown, GstRatePolicy, decompose_receipt};
use crate::plans::{activation_time, applicable_plans, canonical_order};
use shared::models::{
    FlatSnapshot, Installment, SocietyReport, SocietySnapshot, TowerReport, TowerSnapshot,
};
use shared::{AppResult, Money};
use std::collections::HashSet;

/// Build the collection report for one society
///
/// Never fails: a sale pointing at an unknown ratio is logged and
/// allocated against no installments.
pub fn build_society_report(snapshot: &SocietySnapshot) -> SocietyReport {
    let mut society_installments = Vec::new();
    let mut seen = HashSet::new();

    let towers: Vec<TowerReport> = snapshot
        .towers
        .iter()
        .map(|tower| {
            let (report, installments) = build_tower_report(snapshot, tower);
            for installment in installments {
                if seen.insert(installment.id) {
                    society_installments.push(installment);
                }
            }
            report
        })
        .collect();

    let society_installments = canonical_order(&society_installments);
    let report = aggregate_society(snapshot.society_id, towers, &society_installments);

    tracing::info!(
        society_id = snapshot.society_id,
        towers = report.towers.len(),
        installments = report.breakdown.len(),
        total = %report.overall.total,
        paid = %report.overall.paid,
        "Society report built"
    );
    report
}

fn build_tower_report(
    snapshot: &SocietySnapshot,
    tower: &TowerSnapshot,
) -> (TowerReport, Vec<Installment>) {
    let standalone = applicable_plans(&snapshot.plans, &snapshot.activations, tower.tower_id);
    let mut tower_installments = Vec::new();
    let mut seen = HashSet::new();

    let flats: Vec<FlatAllocation> = tower
        .flats
        .iter()
        .map(|flat| {
            let Some(entry) = flat.sale.as_ref() else {
                return FlatAllocation::unsold(flat.flat_id);
            };
            let installments = resolve_installments(snapshot, flat, &standalone);
            let allocation = allocate_with(&entry.sale, &installments, &entry.receipts, |item| {
                // Only standalone tower plans carry an activation
                if item.source_ratio_id.is_some() || item.scope.is_direct() {
                    return None;
                }
                activation_time(&snapshot.activations, item.id, tower.tower_id)
            });

            for installment in installments {
                if seen.insert(installment.id) {
                    tower_installments.push(installment);
                }
            }
            FlatAllocation::sold(flat.flat_id, entry.sale.total_price, allocation)
        })
        .collect();

    let tower_installments = canonical_order(&tower_installments);
    let report = aggregate_tower(tower.tower_id, &flats, &tower_installments);
    (report, tower_installments)
}

/// A sale's ratio when it has one, otherwise the tower's standalone plans
fn resolve_installments(
    snapshot: &SocietySnapshot,
    flat: &FlatSnapshot,
    standalone: &[Installment],
) -> Vec<Installment> {
    let Some(sale) = flat.sale.as_ref().map(|entry| &entry.sale) else {
        return Vec::new();
    };
    match sale.ratio_id {
        Some(ratio_id) => match snapshot.ratio(ratio_id) {
            Some(ratio) => canonical_order(&ratio.items),
            None => {
                tracing::warn!(
                    sale_id = sale.id,
                    flat_id = flat.flat_id,
                    ratio_id,
                    "Sale references an unknown ratio; allocating against no installments"
                );
                Vec::new()
            }
        },
        None => standalone.to_vec(),
    }
}

/// GST contained in the usable receipts of a society
///
/// Under [`GstRatePolicy::Strict`] the first receipt with an unsupported
/// rate fails the whole computation.
pub fn gst_collected(snapshot: &SocietySnapshot, policy: GstRatePolicy) -> AppResult<GstBreakdown> {
    let mut collected = GstBreakdown {
        base: Money::ZERO,
        tax_half_1: Money::ZERO,
        tax_half_2: Money::ZERO,
    };

    let receipts = snapshot
        .towers
        .iter()
        .flat_map(|tower| &tower.flats)
        .filter_map(|flat| flat.sale.as_ref())
        .flat_map(|entry| &entry.receipts)
        .filter(|receipt| receipt.is_usable());

    for receipt in receipts {
        let part = decompose_receipt(receipt, policy)?;
        collected.base += part.base;
        collected.tax_half_1 += part.tax_half_1;
        collected.tax_half_2 += part.tax_half_2;
    }
    Ok(collected)
}
