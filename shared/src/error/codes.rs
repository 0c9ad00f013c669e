//! Unified error codes for the ledger
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Payment plan errors
//! - 5xxx: Receipt errors
//! - 6xxx: Tax errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 4xxx: Payment Plan ====================
    /// Ratio has no items
    RatioEmpty = 4001,
    /// Ratio percentages do not sum to exactly 100
    RatioTotalMismatch = 4002,
    /// Installment percentage outside (0, 100]
    InvalidPercentage = 4003,
    /// Scope/condition pairing not permitted
    InvalidScopeCondition = 4004,
    /// Condition value missing or not positive
    InvalidConditionValue = 4005,
    /// Applicable plans would exceed 100%
    PlanCapacityExceeded = 4006,
    /// Plan already activated for this tower
    PlanAlreadyActivated = 4007,
    /// Plan scope does not allow this operation
    PlanScopeMismatch = 4008,

    // ==================== 5xxx: Receipt ====================
    /// Receipt already has a clearing record
    ReceiptAlreadyCleared = 5001,
    /// Receipt has been marked failed
    ReceiptFailed = 5002,
    /// Clearing record belongs to another receipt
    ReceiptClearMismatch = 5003,
    /// Receipt amount is not positive
    ReceiptInvalidAmount = 5004,

    // ==================== 6xxx: Tax ====================
    /// GST rate is not supported
    UnsupportedGstRate = 6001,

    // ==================== 9xxx: System ====================
    /// I/O error
    IoError = 9002,
    /// Serialization error
    SerializationError = 9003,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::InvalidRequest => "Invalid request",

            // Payment plan
            ErrorCode::RatioEmpty => "Payment plan ratio has no installments",
            ErrorCode::RatioTotalMismatch => "Installment percentages must sum to exactly 100",
            ErrorCode::InvalidPercentage => "Installment percentage must be greater than 0 and at most 100",
            ErrorCode::InvalidScopeCondition => "Condition type is not allowed for this scope",
            ErrorCode::InvalidConditionValue => "Condition value must be a positive number of days",
            ErrorCode::PlanCapacityExceeded => "Applicable payment plans would exceed 100%",
            ErrorCode::PlanAlreadyActivated => "Payment plan is already activated for this tower",
            ErrorCode::PlanScopeMismatch => "Payment plan scope does not allow this operation",

            // Receipt
            ErrorCode::ReceiptAlreadyCleared => "Receipt has already been cleared",
            ErrorCode::ReceiptFailed => "Receipt has been marked failed",
            ErrorCode::ReceiptClearMismatch => "Clearing record does not belong to this receipt",
            ErrorCode::ReceiptInvalidAmount => "Receipt amount must be positive",

            // Tax
            ErrorCode::UnsupportedGstRate => "GST rate is not supported",

            // System
            ErrorCode::IoError => "I/O error",
            ErrorCode::SerializationError => "Serialization error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            5 => Ok(ErrorCode::InvalidRequest),

            // Payment plan
            4001 => Ok(ErrorCode::RatioEmpty),
            4002 => Ok(ErrorCode::RatioTotalMismatch),
            4003 => Ok(ErrorCode::InvalidPercentage),
            4004 => Ok(ErrorCode::InvalidScopeCondition),
            4005 => Ok(ErrorCode::InvalidConditionValue),
            4006 => Ok(ErrorCode::PlanCapacityExceeded),
            4007 => Ok(ErrorCode::PlanAlreadyActivated),
            4008 => Ok(ErrorCode::PlanScopeMismatch),

            // Receipt
            5001 => Ok(ErrorCode::ReceiptAlreadyCleared),
            5002 => Ok(ErrorCode::ReceiptFailed),
            5003 => Ok(ErrorCode::ReceiptClearMismatch),
            5004 => Ok(ErrorCode::ReceiptInvalidAmount),

            // Tax
            6001 => Ok(ErrorCode::UnsupportedGstRate),

            // System
            9002 => Ok(ErrorCode::IoError),
            9003 => Ok(ErrorCode::SerializationError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
