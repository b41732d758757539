//! 按领域分组的配置结构体
//!
//! 从环境变量加载，统一 fallback 逻辑。

use super::env_keys::{self, observability as obv_keys};
use super::loader::{env_bool, env_optional, env_or};

/// 依赖定位配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorConfig {
    /// 依赖根目录（其下包含 qwt/ 与 Qt/），空值视为未设置
    pub deps_root: Option<String>,
}

impl LocatorConfig {
    /// 从环境变量加载（会自动加载 .env）
    pub fn from_env() -> Self {
        super::loader::load_dotenv();
        Self {
            deps_root: env_optional(env_keys::OPTICKSDEPENDENCIES, &[]),
        }
    }

    /// CLI `--deps-root` 覆盖环境变量；空字符串同样视为未设置
    pub fn with_cli_override(mut self, deps_root: Option<String>) -> Self {
        if let Some(root) = deps_root {
            let root = root.trim().to_string();
            self.deps_root = if root.is_empty() { None } else { Some(root) };
        }
        self
    }
}

/// 可观测性配置：quiet、log_level、log_json
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl ObservabilityConfig {
    pub fn from_env() -> &'static Self {
        use std::sync::OnceLock;
        static CACHE: OnceLock<ObservabilityConfig> = OnceLock::new();
        CACHE.get_or_init(|| {
            super::loader::load_dotenv();
            Self {
                quiet: env_bool(obv_keys::DEPCONF_QUIET, &[], false),
                log_level: env_or(obv_keys::DEPCONF_LOG_LEVEL, &[], || {
                    "depconf=info,depconf_core=info".to_string()
                }),
                log_json: env_bool(obv_keys::DEPCONF_LOG_JSON, &[], false),
            }
        })
    }
}
