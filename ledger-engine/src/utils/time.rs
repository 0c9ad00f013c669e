//! 时间工具函数
//!
//! Timestamps are Unix millis everywhere; chrono is only used for
//! calendar arithmetic and display.

use chrono::{DateTime, Duration, Utc};
use shared::Timestamp;

/// `ts + days` calendar days, `None` when out of chrono's range
pub fn add_days(ts: Timestamp, days: i64) -> Option<Timestamp> {
    let start = DateTime::<Utc>::from_timestamp_millis(ts)?;
    let delta = Duration::try_days(days)?;
    start
        .checked_add_signed(delta)
        .map(|dt| dt.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    // 2024-01-01 00:00:00 UTC
    const JAN_1: Timestamp = 1_704_067_200_000;

    #[test]
    fn test_add_days() {
        let due = add_days(JAN_1, 30).unwrap();
        assert_eq!(due - JAN_1, 30 * shared::types::MILLIS_PER_DAY);
        let date = DateTime::<Utc>::from_timestamp_millis(due).unwrap();
        assert_eq!((date.month(), date.day()), (1, 31));
    }

    #[test]
    fn test_add_days_out_of_range() {
        assert!(add_days(i64::MAX, 1).is_none());
    }
}
