//! 工具模块 - 通用工具函数
//!
//! # 内容
//!
//! - [`logger`] - tracing 日志初始化
//! - [`money`] - Decimal 金额计算
//! - [`time`] - 毫秒时间戳与日期换算

pub mod logger;
pub mod money;
pub mod time;
