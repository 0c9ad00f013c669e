//! Receipt Model (收款)

use crate::types::{Money, Timestamp};
use serde::{Deserialize, Serialize};

/// Receipt lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceiptStatus {
    #[serde(rename = "OPEN")]
    Open,
    #[serde(rename = "CLEARED")]
    Cleared,
    /// Terminal; never usable for allocation again
    #[serde(rename = "FAILED")]
    Failed,
}

/// One payment event against a sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: i64,
    pub sale_id: i64,
    /// Amount credited to the sale
    pub amount: Money,
    /// Gross amount (GST-inclusive)
    pub total_amount: Money,
    /// GST rate used for this receipt, in percent
    pub gst_rate: u32,
    /// A ReceiptClear record is attached
    #[serde(default)]
    pub cleared: bool,
    #[serde(default)]
    pub failed: bool,
    pub created_at: Timestamp,
}

impl Receipt {
    /// Current status; a failed receipt stays failed even if cleared
    pub fn status(&self) -> ReceiptStatus {
        if self.failed {
            ReceiptStatus::Failed
        } else if self.cleared {
            ReceiptStatus::Cleared
        } else {
            ReceiptStatus::Open
        }
    }

    /// Counts towards a sale's paid amount
    pub fn is_usable(&self) -> bool {
        self.status() == ReceiptStatus::Cleared
    }
}

/// Bank clearing record (at most one per receipt)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptClear {
    pub id: i64,
    pub receipt_id: i64,
    pub cleared_at: Timestamp,
    #[serde(default)]
    pub bank_reference: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn receipt(cleared: bool, failed: bool) -> Receipt {
        Receipt {
            id: 1,
            sale_id: 1,
            amount: dec!(100000),
            total_amount: dec!(105000),
            gst_rate: 5,
            cleared,
            failed,
            created_at: 0,
        }
    }

    #[test]
    fn test_status() {
        assert_eq!(receipt(false, false).status(), ReceiptStatus::Open);
        assert_eq!(receipt(true, false).status(), ReceiptStatus::Cleared);
        assert_eq!(receipt(false, true).status(), ReceiptStatus::Failed);
        assert_eq!(receipt(true, true).status(), ReceiptStatus::Failed);
    }

    #[test]
    fn test_only_cleared_unfailed_is_usable() {
        assert!(receipt(true, false).is_usable());
        assert!(!receipt(false, false).is_usable());
        assert!(!receipt(true, true).is_usable());
    }

    #[test]
    fn test_deserialize_defaults_flags() {
        let json = r#"{"id":5,"sale_id":2,"amount":"250.00","total_amount":"262.50","gst_rate":5,"created_at":0}"#;
        let r: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(r.amount, dec!(250.00));
        assert_eq!(r.status(), ReceiptStatus::Open);
    }
}
