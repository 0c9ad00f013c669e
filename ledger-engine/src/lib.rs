//! Ledger Engine - 房产销售收款分摊与汇总引擎
//!
//! # 架构概述
//!
//! Pure, synchronous computations over data the data-access layer has
//! already fetched:
//!
//! - **GST** (`gst`): splits GST-inclusive amounts into base + two equal halves
//! - **Payment plans** (`plans`): ratio validation, canonical ordering,
//!   standalone plan capacity and tower activation, due dates
//! - **Receipts** (`receipts`): open → cleared / failed lifecycle
//! - **Allocation** (`allocation`): waterfall of cleared cash over installments
//! - **Aggregation** (`aggregation`): flat → tower → society reports
//! - **Schedule** (`schedule`): dated, GST-split installment demands
//! - **Report** (`report`): snapshot → society report orchestration
//!
//! # 模块结构
//!
//! ```text
//! ledger-engine/src/
//! ├── core/          # 配置
//! ├── utils/         # 日志、金额、时间
//! ├── gst/
//! ├── plans/
//! ├── receipts/
//! ├── allocation/
//! ├── aggregation/
//! ├── schedule.rs
//! └── report.rs
//! ```
//!
//! None of the computations hold shared state; they may be called
//! concurrently for different sales and towers.

pub mod aggregation;
pub mod allocation;
pub mod core;
pub mod gst;
pub mod plans;
pub mod receipts;
pub mod report;
pub mod schedule;
pub mod utils;

// Re-export 公共类型
pub use aggregation::{FlatAllocation, aggregate_society, aggregate_tower};
pub use allocation::allocate;
pub use crate::core::{EngineConfig, setup_environment};
pub use gst::{GstBreakdown, GstRate, GstRatePolicy, decompose};
pub use plans::{ValidationRules, canonical_order, compute_due, create_ratio};
pub use report::{build_society_report, gst_collected};
pub use schedule::{DemandLine, demand_schedule, demand_schedule_with};

// Re-export unified error types from shared
pub use shared::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
