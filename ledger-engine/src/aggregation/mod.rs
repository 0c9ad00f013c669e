//! Aggregator (汇总)
//!
//! Rolls per-sale allocation results up to tower reports, and tower
//! reports up to a society report. Both levels use the same per-installment
//! table: rows are seeded in canonical order from the given installment
//! list, and installments only seen in the data are appended in the order
//! they are first met.

mod society;
mod tower;

pub use society::aggregate_society;
pub use tower::aggregate_tower;

use crate::plans::canonical_refs;
use serde::{Deserialize, Serialize};
use shared::Money;
use shared::models::{AllocationResult, Installment, InstallmentBreakdown};
use std::collections::HashMap;

/// One flat's input to tower aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatAllocation {
    pub flat_id: i64,
    /// Sale price, zero for unsold flats
    pub sale_total: Money,
    /// None for unsold flats
    pub allocation: Option<AllocationResult>,
}

impl FlatAllocation {
    pub fn sold(flat_id: i64, sale_total: Money, allocation: AllocationResult) -> Self {
        Self {
            flat_id,
            sale_total,
            allocation: Some(allocation),
        }
    }

    pub fn unsold(flat_id: i64) -> Self {
        Self {
            flat_id,
            sale_total: Money::ZERO,
            allocation: None,
        }
    }

    /// Has a sale with a positive total
    pub fn is_sold(&self) -> bool {
        self.allocation.is_some() && self.sale_total > Money::ZERO
    }
}

/// Per-installment rows keyed by installment id, insertion ordered
struct BreakdownTable {
    rows: Vec<InstallmentBreakdown>,
    index: HashMap<i64, usize>,
}

impl BreakdownTable {
    fn seeded(installments: &[Installment]) -> Self {
        let mut table = Self {
            rows: Vec::with_capacity(installments.len()),
            index: HashMap::with_capacity(installments.len()),
        };
        for installment in canonical_refs(installments) {
            if !table.index.contains_key(&installment.id) {
                table.push(InstallmentBreakdown::new(installment.id, installment.name.as_str()));
            }
        }
        table
    }

    fn push(&mut self, row: InstallmentBreakdown) -> usize {
        let pos = self.rows.len();
        self.index.insert(row.installment_id, pos);
        self.rows.push(row);
        pos
    }

    /// Row for `installment_id`, appended with `name` when missing
    fn row_mut(&mut self, installment_id: i64, name: &str) -> &mut InstallmentBreakdown {
        let pos = match self.index.get(&installment_id) {
            Some(&pos) => pos,
            None => {
                tracing::debug!(installment_id, "Installment outside the given list appended");
                self.push(InstallmentBreakdown::new(installment_id, name))
            }
        };
        &mut self.rows[pos]
    }

    fn into_rows(self) -> Vec<InstallmentBreakdown> {
        self.rows
    }
}
