//! Shared types for the property-sales ledger
//!
//! Value objects exchanged between the data-access layer, the
//! collection engine and presentation code: sales, payment plans,
//! receipts, allocation results and tower/society reports, plus the
//! unified error system.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use types::{Money, Timestamp};
