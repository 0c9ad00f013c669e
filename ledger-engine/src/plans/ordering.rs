use shared::models::Installment;

/// Canonical installment order
///
/// Direct (sale-scope) installments first, then tower/flat-activated ones;
/// within each group by `created_at` ascending. The sort is stable, so
/// equal timestamps keep their input order.
pub fn canonical_refs(items: &[Installment]) -> Vec<&Installment> {
    let mut ordered: Vec<&Installment> = items.iter().collect();
    ordered.sort_by_key(|item| (!item.scope.is_direct(), item.created_at));
    ordered
}

/// Owned variant of [`canonical_refs`]
pub fn canonical_order(items: &[Installment]) -> Vec<Installment> {
    canonical_refs(items).into_iter().cloned().collect()
}
