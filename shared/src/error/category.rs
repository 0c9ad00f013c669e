//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// - 0xxx: General errors
/// - 4xxx: Payment plan errors
/// - 5xxx: Receipt errors
/// - 6xxx: Tax errors
/// - everything else: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Payment plan errors (4xxx)
    Plan,
    /// Receipt errors (5xxx)
    Receipt,
    /// Tax errors (6xxx)
    Tax,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            4000..5000 => Self::Plan,
            5000..6000 => Self::Receipt,
            6000..7000 => Self::Tax,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Plan => "plan",
            Self::Receipt => "receipt",
            Self::Tax => "tax",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }

    /// Validation-class errors are reported to the caller before any
    /// computation proceeds
    pub fn is_validation(&self) -> bool {
        matches!(self.category(), ErrorCategory::Plan | ErrorCategory::Tax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Plan);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Receipt);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::Tax);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::InvalidRequest.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::RatioTotalMismatch.category(), ErrorCategory::Plan);
        assert_eq!(ErrorCode::ReceiptFailed.category(), ErrorCategory::Receipt);
        assert_eq!(ErrorCode::UnsupportedGstRate.category(), ErrorCategory::Tax);
        assert_eq!(ErrorCode::ConfigError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_is_validation() {
        assert!(ErrorCode::RatioTotalMismatch.is_validation());
        assert!(ErrorCode::UnsupportedGstRate.is_validation());
        assert!(!ErrorCode::InvalidRequest.is_validation());
        assert!(!ErrorCode::ReceiptAlreadyCleared.is_validation());
        assert!(!ErrorCode::IoError.is_validation());
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&ErrorCategory::Receipt).unwrap();
        assert_eq!(json, "\"receipt\"");
        let category: ErrorCategory = serde_json::from_str("\"plan\"").unwrap();
        assert_eq!(category, ErrorCategory::Plan);
        assert_eq!(ErrorCategory::Tax.name(), "tax");
    }
}
