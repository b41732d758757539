//! The flag delta a dependency resolution produces.

use serde::Serialize;

/// Compiler/linker additions computed for one dependency.
///
/// The locator never touches a build environment directly: it returns a
/// delta and the caller merges it with `BuildEnvironment::apply`. This keeps
/// the append-not-overwrite contract at a single, testable seam.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigDelta {
    /// Include-path flags, in the order they must be appended.
    pub cxxflags: Vec<String>,
    /// Library search path. Single value — one platform layout per invocation.
    pub libpath: Option<String>,
    /// Library names to link.
    pub libs: Vec<String>,
}
