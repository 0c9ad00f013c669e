//! Sale Model (销售)

use crate::types::{Money, Timestamp};
use serde::{Deserialize, Serialize};

/// One flat's purchase transaction
///
/// `total_price` is fixed once the price breakdown has been computed; the
/// engine only ever reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    pub flat_id: i64,
    /// Total sale price (tax-inclusive)
    pub total_price: Money,
    /// Booking time (Unix millis)
    pub created_at: Timestamp,
    /// Payment plan ratio chosen at sale time; `None` means the society's
    /// standalone plans apply
    #[serde(default)]
    pub ratio_id: Option<i64>,
}

impl Sale {
    /// Whether the sale carries a usable total price
    pub fn has_positive_total(&self) -> bool {
        self.total_price > Money::ZERO
    }
}
