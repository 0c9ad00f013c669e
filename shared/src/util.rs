use crate::types::Timestamp;
use rand::Rng;
use std::collections::HashSet;

/// Id epoch: 2024-01-01 00:00:00 UTC
const ID_EPOCH_MS: Timestamp = 1_704_067_200_000;

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> Timestamp {
    chrono::Utc::now().timestamp_millis()
}

/// Snowflake-style id for ratios and installments created by the engine
///
/// 41 bits of milliseconds since [`ID_EPOCH_MS`] followed by 12 random
/// bits, so ids stay below 2^53 and sort roughly by creation time.
pub fn snowflake_id() -> i64 {
    snowflake_id_at(now_millis())
}

/// [`snowflake_id`] for a given clock reading
pub fn snowflake_id_at(now: Timestamp) -> i64 {
    let ts = (now - ID_EPOCH_MS).max(0) & 0x1FF_FFFF_FFFF;
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000);
    (ts << 12) | rand_bits
}

/// `count` distinct snowflake ids
///
/// Ids drawn in the same millisecond only differ in their random bits,
/// so duplicates are redrawn.
pub fn snowflake_ids(count: usize) -> Vec<i64> {
    let mut seen = HashSet::with_capacity(count);
    let mut ids = Vec::with_capacity(count);
    while ids.len() < count {
        let id = snowflake_id();
        if seen.insert(id) {
            ids.push(id);
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_positive_and_below_2_pow_53() {
        for _ in 0..100 {
            let id = snowflake_id();
            assert!(id > 0);
            assert!(id < (1_i64 << 53));
        }
    }

    #[test]
    fn test_ids_follow_clock() {
        let earlier = snowflake_id_at(ID_EPOCH_MS + 1_000);
        let later = snowflake_id_at(ID_EPOCH_MS + 2_000);
        assert!(earlier < later);
        assert_eq!(snowflake_id_at(ID_EPOCH_MS - 5) >> 12, 0);
    }

    #[test]
    fn test_batch_ids_are_distinct() {
        let ids = snowflake_ids(5000);
        let unique: HashSet<i64> = ids.iter().copied().collect();
        assert_eq!(ids.len(), 5000);
        assert_eq!(unique.len(), 5000);
    }
}
