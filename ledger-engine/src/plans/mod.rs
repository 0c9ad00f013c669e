//! Payment Plan Model
//!
//! - [`rules`]: scope/condition table and all-or-nothing ratio validation
//! - [`ordering`]: canonical installment order shared by allocation and reports
//! - [`standalone`]: Direct/Tower plans, incremental 100% capacity checks
//!   and tower activation
//! - [`compute_due`]: concrete due dates for WITHIN_DAYS installments

mod ordering;
mod rules;
mod standalone;

pub use ordering::*;
pub use rules::*;
pub use standalone::*;

use crate::utils::time::add_days;
use shared::Timestamp;
use shared::models::{ConditionType, Installment, Sale};

/// Due date of an installment for a sale
///
/// Only WITHIN_DAYS yields a date: booking + N days. For non-direct
/// installments activated after booking, the N days run from the
/// activation instead. Allotment and stage triggers have no date here.
pub fn compute_due(
    installment: &Installment,
    sale: &Sale,
    tower_activated_at: Option<Timestamp>,
) -> Option<Timestamp> {
    if installment.condition_type != ConditionType::WithinDays {
        return None;
    }
    let days = installment.condition_value.filter(|d| *d > 0)?;

    let start = match tower_activated_at {
        Some(activated) if !installment.scope.is_direct() => sale.created_at.max(activated),
        _ => sale.created_at,
    };
    add_days(start, days)
}
