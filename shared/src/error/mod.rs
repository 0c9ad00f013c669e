//! Unified error system for the ledger
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Payment plan errors
//! - 5xxx: Receipt errors
//! - 6xxx: Tax errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::RatioEmpty);
//!
//! // Create an error with details
//! let err = AppError::with_message(ErrorCode::RatioTotalMismatch, "Percentages sum to 99.99")
//!     .with_detail("sum", "99.99");
//! assert_eq!(err.code, ErrorCode::RatioTotalMismatch);
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
