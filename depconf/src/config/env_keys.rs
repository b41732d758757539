//! 环境变量 key 常量
//!
//! 构建环境字段（OPTICKS*、OS、MODE）沿用外层构建系统的命名，
//! DEPCONF_* 为本工具自身的可观测性开关。

/// 依赖根目录，绝对路径，其下包含 `qwt/` 与 `Qt/` 子目录
pub const OPTICKSDEPENDENCIES: &str = "OPTICKSDEPENDENCIES";

/// 目标平台标识，如 linux64、win64
pub const OPTICKSPLATFORM: &str = "OPTICKSPLATFORM";

/// 目标操作系统标识（"windows" 选择 Windows 布局）
pub const OS: &str = "OS";

/// 构建模式（仅 Windows 分支使用）
pub const MODE: &str = "MODE";

/// 可观测性与日志
pub mod observability {
    pub const DEPCONF_QUIET: &str = "DEPCONF_QUIET";

    pub const DEPCONF_LOG_LEVEL: &str = "DEPCONF_LOG_LEVEL";

    pub const DEPCONF_LOG_JSON: &str = "DEPCONF_LOG_JSON";
}
