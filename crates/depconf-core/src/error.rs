//! Error taxonomy for dependency resolution.
//!
//! Exactly one kind, and it is never fatal: callers degrade to a warning and
//! continue without the flags. Nothing in this crate panics or aborts on the
//! resolution path.

use thiserror::Error;

/// Which third-party package a resolution failed to locate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    /// The Qwt widget library (plot/dial/knob controls built on the toolkit).
    Qwt,
    /// The Qt toolkit Qwt compiles against.
    Qt,
}

impl Dependency {
    /// Package name as it appears in warnings.
    pub fn name(&self) -> &'static str {
        match self {
            Dependency::Qwt => "Qwt",
            Dependency::Qt => "Qt",
        }
    }
}

/// A dependency was not present under the supplied root.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Could not detect {}", .which.name())]
pub struct DependencyNotFound {
    /// The missing package.
    pub which: Dependency,
}
