//! Common types for the shared crate

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Monetary amount and percentage type.
///
/// Exact decimal; serialized as a decimal string at every boundary.
pub type Money = rust_decimal::Decimal;

/// Milliseconds in one calendar day
pub const MILLIS_PER_DAY: i64 = 86_400_000;
