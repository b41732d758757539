//! 统一环境变量加载逻辑
//!
//! 集中维护 fallback 链，避免在业务代码中重复 `or_else` 调用。

use std::env;

/// 加载当前目录下的 `.env` 到环境变量（不覆盖已存在的变量）
pub fn load_dotenv() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let path = env::current_dir()
            .map(|d| d.join(".env"))
            .unwrap_or_else(|_| std::path::PathBuf::from(".env"));
        if let Ok(content) = std::fs::read_to_string(&path) {
            for line in content.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some(eq_pos) = line.find('=') {
                    let key = line[..eq_pos].trim();
                    let mut value = line[eq_pos + 1..].trim();
                    if (value.starts_with('"') && value.ends_with('"'))
                        || (value.starts_with('\'') && value.ends_with('\''))
                    {
                        value = &value[1..value.len() - 1];
                    }
                    if !key.is_empty() && env::var(key).is_err() {
                        #[allow(unsafe_code)]
                        unsafe {
                            env::set_var(key, value);
                        }
                    }
                }
            }
        }
    });
}

/// 从主变量或别名链读取环境变量，失败时使用默认值
pub fn env_or<F>(primary: &str, aliases: &[&str], default: F) -> String
where
    F: FnOnce() -> String,
{
    env::var(primary)
        .ok()
        .or_else(|| aliases.iter().find_map(|a| env::var(a).ok()))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(default)
}

/// 从主变量或别名链读取，返回 Option（空值视为未设置）
pub fn env_optional(primary: &str, aliases: &[&str]) -> Option<String> {
    env::var(primary)
        .ok()
        .or_else(|| aliases.iter().find_map(|a| env::var(a).ok()))
        .and_then(|s| {
            let s = s.trim().to_string();
            if s.is_empty() {
                None
            } else {
                Some(s)
            }
        })
}

/// 解析布尔型环境变量：1/true/yes 为 true，0/false/no 为 false
pub fn env_bool(primary: &str, aliases: &[&str], default: bool) -> bool {
    let v = env::var(primary)
        .ok()
        .or_else(|| aliases.iter().find_map(|a| env::var(a).ok()));
    match v.as_deref() {
        Some(s) => !matches!(
            s.trim().to_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        ),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(key: &str, value: &str) {
        #[allow(unsafe_code)]
        unsafe {
            env::set_var(key, value);
        }
    }

    fn unset(key: &str) {
        #[allow(unsafe_code)]
        unsafe {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_env_or_prefers_primary() {
        set("DEPCONF_TEST_OR_PRIMARY", "a");
        set("DEPCONF_TEST_OR_ALIAS", "b");
        let v = env_or(
            "DEPCONF_TEST_OR_PRIMARY",
            &["DEPCONF_TEST_OR_ALIAS"],
            || "c".to_string(),
        );
        assert_eq!(v, "a");
        unset("DEPCONF_TEST_OR_PRIMARY");
        unset("DEPCONF_TEST_OR_ALIAS");
    }

    #[test]
    fn test_env_or_falls_back_to_alias_then_default() {
        set("DEPCONF_TEST_OR2_ALIAS", "b");
        let v = env_or(
            "DEPCONF_TEST_OR2_PRIMARY",
            &["DEPCONF_TEST_OR2_ALIAS"],
            || "c".to_string(),
        );
        assert_eq!(v, "b");
        unset("DEPCONF_TEST_OR2_ALIAS");
        let v = env_or("DEPCONF_TEST_OR2_PRIMARY", &[], || "c".to_string());
        assert_eq!(v, "c");
    }

    #[test]
    fn test_env_optional_empty_is_none() {
        set("DEPCONF_TEST_OPT_EMPTY", "   ");
        assert_eq!(env_optional("DEPCONF_TEST_OPT_EMPTY", &[]), None);
        unset("DEPCONF_TEST_OPT_EMPTY");
        assert_eq!(env_optional("DEPCONF_TEST_OPT_EMPTY", &[]), None);
    }

    #[test]
    fn test_env_optional_trims() {
        set("DEPCONF_TEST_OPT_TRIM", " /deps ");
        assert_eq!(
            env_optional("DEPCONF_TEST_OPT_TRIM", &[]),
            Some("/deps".to_string())
        );
        unset("DEPCONF_TEST_OPT_TRIM");
    }

    #[test]
    fn test_env_bool_parsing() {
        set("DEPCONF_TEST_BOOL", "0");
        assert!(!env_bool("DEPCONF_TEST_BOOL", &[], true));
        set("DEPCONF_TEST_BOOL", "yes");
        assert!(env_bool("DEPCONF_TEST_BOOL", &[], false));
        unset("DEPCONF_TEST_BOOL");
        assert!(env_bool("DEPCONF_TEST_BOOL", &[], true));
    }
}
