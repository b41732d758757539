//! Presence probe for the qwt build tool.
//!
//! Answers one question: is a command named `qwt` reachable from the current
//! execution context? Pure query — no mutation, no error; undetectable means
//! `false`, never a failure.

use std::env;
use std::ffi::OsStr;
use std::path::Path;

/// Command name searched for on `PATH`.
const QWT_TOOL: &str = "qwt";

/// Whether a `qwt` command is discoverable on the current `PATH`.
pub fn exists() -> bool {
    exists_in(env::var_os("PATH").as_deref())
}

/// Same search against a caller-supplied `PATH` value.
///
/// The injectable seam used by tests; `None` (variable unset) yields `false`.
pub fn exists_in(path_var: Option<&OsStr>) -> bool {
    let Some(path_var) = path_var else {
        return false;
    };
    env::split_paths(path_var).any(|dir| tool_in(&dir))
}

fn tool_in(dir: &Path) -> bool {
    if dir.as_os_str().is_empty() {
        return false;
    }
    if dir.join(QWT_TOOL).is_file() {
        return true;
    }
    // Windows resolves commands through PATHEXT; .exe covers the tool we ship.
    cfg!(target_os = "windows") && dir.join(format!("{QWT_TOOL}.exe")).is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::fs;

    #[test]
    fn test_exists_in_unset_path() {
        assert!(!exists_in(None));
    }

    #[test]
    fn test_exists_in_empty_path() {
        assert!(!exists_in(Some(OsStr::new(""))));
    }

    #[test]
    fn test_exists_in_finds_tool() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("qwt"), "").unwrap();
        let path_var: OsString = dir.path().into();
        assert!(exists_in(Some(&path_var)));
    }

    #[test]
    fn test_exists_in_ignores_directories_named_qwt() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("qwt")).unwrap();
        let path_var: OsString = dir.path().into();
        assert!(!exists_in(Some(&path_var)));
    }

    #[test]
    fn test_exists_in_searches_later_entries() {
        let empty = tempfile::tempdir().unwrap();
        let hit = tempfile::tempdir().unwrap();
        fs::write(hit.path().join("qwt"), "").unwrap();
        let joined = env::join_paths([empty.path(), hit.path()]).unwrap();
        assert!(exists_in(Some(&joined)));
    }
}
