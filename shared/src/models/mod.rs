//! Data models
//!
//! Value objects consumed and produced by the collection engine. All
//! monetary fields are [`Money`](crate::types::Money) and serialize as
//! decimal strings.

pub mod allocation;
pub mod plan;
pub mod receipt;
pub mod report;
pub mod sale;
pub mod snapshot;

// Re-exports
pub use allocation::*;
pub use plan::*;
pub use receipt::*;
pub use report::*;
pub use sale::*;
pub use snapshot::*;
