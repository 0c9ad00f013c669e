//! Receipt lifecycle
//!
//! ```text
//! OPEN ──clear──▶ CLEARED
//!   │                │
//!   └──mark_failed──▶ FAILED (terminal)
//! ```
//!
//! Only CLEARED receipts count towards a sale's paid amount. The
//! persistence layer runs each transition inside a transaction and keeps
//! a unique index on the receipt → clear mapping; these functions decide
//! whether a transition is legal.

use shared::models::{Receipt, ReceiptClear, ReceiptStatus};
use shared::{AppError, AppResult, ErrorCode, Money};

/// Attach a clearing record
pub fn clear_receipt(receipt: &mut Receipt, clear: &ReceiptClear) -> AppResult<()> {
    if clear.receipt_id != receipt.id {
        return Err(AppError::new(ErrorCode::ReceiptClearMismatch)
            .with_detail("receipt_id", receipt.id)
            .with_detail("clear_receipt_id", clear.receipt_id));
    }
    match receipt.status() {
        ReceiptStatus::Failed => Err(AppError::new(ErrorCode::ReceiptFailed)
            .with_detail("receipt_id", receipt.id)),
        ReceiptStatus::Cleared => Err(AppError::new(ErrorCode::ReceiptAlreadyCleared)
            .with_detail("receipt_id", receipt.id)),
        ReceiptStatus::Open => {
            receipt.cleared = true;
            tracing::debug!(receipt_id = receipt.id, clear_id = clear.id, "Receipt cleared");
            Ok(())
        }
    }
}

/// Mark a receipt failed; allowed from OPEN and CLEARED, never undone
pub fn mark_failed(receipt: &mut Receipt) -> AppResult<()> {
    if receipt.failed {
        return Err(AppError::with_message(
            ErrorCode::ReceiptFailed,
            "Receipt has already been marked failed",
        )
        .with_detail("receipt_id", receipt.id));
    }
    if receipt.cleared {
        tracing::warn!(
            receipt_id = receipt.id,
            amount = %receipt.amount,
            "Cleared receipt marked failed; it no longer counts as paid"
        );
    }
    receipt.failed = true;
    Ok(())
}

/// Check a new receipt before it is recorded
pub fn validate_new_receipt(receipt: &Receipt) -> AppResult<()> {
    if receipt.amount <= Money::ZERO || receipt.total_amount <= Money::ZERO {
        return Err(AppError::new(ErrorCode::ReceiptInvalidAmount)
            .with_detail("amount", receipt.amount.to_string())
            .with_detail("total_amount", receipt.total_amount.to_string()));
    }
    if receipt.cleared || receipt.failed {
        return Err(AppError::invalid_request("New receipts start in the OPEN state")
            .with_detail("receipt_id", receipt.id));
    }
    Ok(())
}

/// Σ amount over cleared, non-failed receipts
pub fn usable_total(receipts: &[Receipt]) -> Money {
    receipts
        .iter()
        .filter(|r| r.is_usable())
        .map(|r| r.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn open_receipt(id: i64, amount: Money) -> Receipt {
        Receipt {
            id,
            sale_id: 1,
            amount,
            total_amount: amount,
            gst_rate: 5,
            cleared: false,
            failed: false,
            created_at: 0,
        }
    }

    fn clear_for(receipt_id: i64) -> ReceiptClear {
        ReceiptClear {
            id: 900 + receipt_id,
            receipt_id,
            cleared_at: 10,
            bank_reference: Some("UTR123".into()),
        }
    }

    #[test]
    fn test_clear_open_receipt() {
        let mut r = open_receipt(1, dec!(1000));
        clear_receipt(&mut r, &clear_for(1)).unwrap();
        assert_eq!(r.status(), ReceiptStatus::Cleared);
    }

    #[test]
    fn test_clear_twice_rejected() {
        let mut r = open_receipt(1, dec!(1000));
        clear_receipt(&mut r, &clear_for(1)).unwrap();
        let err = clear_receipt(&mut r, &clear_for(1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ReceiptAlreadyCleared);
    }

    #[test]
    fn test_clear_mismatched_record_rejected() {
        let mut r = open_receipt(1, dec!(1000));
        let err = clear_receipt(&mut r, &clear_for(2)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ReceiptClearMismatch);
        assert_eq!(r.status(), ReceiptStatus::Open);
    }

    #[test]
    fn test_failed_is_terminal() {
        let mut r = open_receipt(1, dec!(1000));
        mark_failed(&mut r).unwrap();
        assert_eq!(r.status(), ReceiptStatus::Failed);

        let err = clear_receipt(&mut r, &clear_for(1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ReceiptFailed);
        let err = mark_failed(&mut r).unwrap_err();
        assert_eq!(err.code, ErrorCode::ReceiptFailed);
        assert_eq!(r.status(), ReceiptStatus::Failed);
    }

    #[test]
    fn test_cleared_receipt_can_fail() {
        let mut r = open_receipt(1, dec!(100000));
        clear_receipt(&mut r, &clear_for(1)).unwrap();
        mark_failed(&mut r).unwrap();
        assert!(r.cleared);
        assert_eq!(r.status(), ReceiptStatus::Failed);
        assert_eq!(usable_total(&[r]), dec!(0));
    }

    #[test]
    fn test_usable_total() {
        let mut cleared = open_receipt(1, dec!(200000));
        cleared.cleared = true;
        let open = open_receipt(2, dec!(50000));
        let mut failed = open_receipt(3, dec!(100000));
        failed.cleared = true;
        failed.failed = true;
        let mut second = open_receipt(4, dec!(150000));
        second.cleared = true;

        assert_eq!(usable_total(&[cleared, open, failed, second]), dec!(350000));
        assert_eq!(usable_total(&[]), dec!(0));
    }

    #[test]
    fn test_validate_new_receipt() {
        assert!(validate_new_receipt(&open_receipt(1, dec!(10))).is_ok());

        let err = validate_new_receipt(&open_receipt(1, dec!(0))).unwrap_err();
        assert_eq!(err.code, ErrorCode::ReceiptInvalidAmount);

        let mut pre_cleared = open_receipt(1, dec!(10));
        pre_cleared.cleared = true;
        let err = validate_new_receipt(&pre_cleared).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
    }
}
