use crate::gst::{GstRate, GstRatePolicy};
use shared::{AppError, AppResult};

/// 引擎配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | GST_RATE_POLICY | strict | strict: 拒绝不支持的税率; coerce: 替换为默认税率 |
/// | DEFAULT_GST_RATE | 5 | 默认税率 (必须是支持的税率) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 格式日志 |
/// | LOG_DIR | (unset) | 日志目录 (按天滚动) |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// GST_RATE_POLICY=coerce LOG_LEVEL=debug ledger-report snapshot.json
/// ```
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Unsupported GST rates are rejected unless this is true
    pub coerce_gst_rate: bool,
    /// Rate used for coercion and for schedules without an explicit rate
    pub default_gst_rate: GstRate,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl EngineConfig {
    /// 从环境变量加载配置
    ///
    /// Unset variables fall back to defaults; malformed ones are errors.
    pub fn from_env() -> AppResult<Self> {
        let coerce_gst_rate = match std::env::var("GST_RATE_POLICY") {
            Ok(policy) => parse_policy(&policy)?,
            Err(_) => false,
        };
        let default_gst_rate = match std::env::var("DEFAULT_GST_RATE") {
            Ok(raw) => {
                let rate: u32 = raw.trim().parse().map_err(|_| {
                    AppError::config(format!("DEFAULT_GST_RATE must be an integer, got '{}'", raw))
                })?;
                GstRate::try_from(rate)?
            }
            Err(_) => GstRate::Five,
        };

        Ok(Self {
            coerce_gst_rate,
            default_gst_rate,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        })
    }

    /// GST rate policy handed to decomposition and schedule functions
    pub fn gst_policy(&self) -> GstRatePolicy {
        if self.coerce_gst_rate {
            GstRatePolicy::CoerceTo(self.default_gst_rate)
        } else {
            GstRatePolicy::Strict
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            coerce_gst_rate: false,
            default_gst_rate: GstRate::Five,
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            environment: "development".into(),
        }
    }
}

fn parse_policy(raw: &str) -> AppResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "strict" => Ok(false),
        "coerce" => Ok(true),
        other => Err(AppError::config(format!(
            "GST_RATE_POLICY must be 'strict' or 'coerce', got '{}'",
            other
        ))
        .with_detail("variable", "GST_RATE_POLICY")),
    }
}
