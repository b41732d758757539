//! Caller-owned build-environment record.
//!
//! The outer build orchestrator owns this; the locator only appends to it.
//! Consumed fields (`target`) come in populated, produced fields start empty
//! and grow as dependencies are located.

use serde::Serialize;

use crate::delta::ConfigDelta;

/// Target identifiers consumed by dependency resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    /// Platform identifier used in library path layout, e.g. `linux64`, `win64`.
    pub platform: String,
    /// OS identifier. The literal `windows` selects the Windows layout.
    pub os: String,
    /// Build mode, e.g. `debug` or `release`. Consulted on Windows only.
    pub mode: String,
}

/// Mutable build environment: one target plus the flag lists produced for it.
///
/// `apply` is append-only and NOT idempotent — merging the same delta twice
/// duplicates flags and library names. Invoke the locator once per
/// environment; deduplication is the caller's contract, not performed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildEnvironment {
    /// Consumed target identifiers.
    pub target: Target,
    /// Compiler flags, ordered, append-only.
    pub cxxflags: Vec<String>,
    /// Library search path. Set (overwrite) semantics: platform-singular.
    pub libpath: Option<String>,
    /// Library names to link, append-only.
    pub libs: Vec<String>,
}

impl BuildEnvironment {
    /// Construct an environment with empty produced fields.
    pub fn new(
        platform: impl Into<String>,
        os: impl Into<String>,
        mode: impl Into<String>,
    ) -> Self {
        Self {
            target: Target {
                platform: platform.into(),
                os: os.into(),
                mode: mode.into(),
            },
            cxxflags: Vec::new(),
            libpath: None,
            libs: Vec::new(),
        }
    }

    /// Merge a resolution delta: extend `cxxflags`, set `libpath`, extend `libs`.
    ///
    /// Never removes or reorders existing entries.
    pub fn apply(&mut self, delta: &ConfigDelta) {
        self.cxxflags.extend(delta.cxxflags.iter().cloned());
        if let Some(libpath) = &delta.libpath {
            self.libpath = Some(libpath.clone());
        }
        self.libs.extend(delta.libs.iter().cloned());
    }
}
