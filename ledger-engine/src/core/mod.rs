//! 核心模块 - 配置与运行环境

pub mod config;

pub use config::EngineConfig;

use crate::utils::logger::init_logger_with_file;
use shared::AppResult;

/// 设置运行环境: 加载 .env, 读取配置, 初始化日志
pub fn setup_environment() -> AppResult<EngineConfig> {
    // Missing .env is fine
    let _ = dotenv::dotenv();

    let config = EngineConfig::from_env()?;
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    );

    tracing::debug!(
        environment = %config.environment,
        gst_policy = ?config.gst_policy(),
        "Engine environment ready"
    );
    Ok(config)
}
