//! Locate the Qwt widget library and the Qt toolkit under a dependency root.
//!
//! Expected layout under the root:
//!
//! ```text
//! {root}/qwt/include
//! {root}/qwt/lib/{platform}            (non-Windows)
//! {root}/qwt/lib/{platform}/{mode}     (Windows)
//! {root}/Qt/include/{tag}/QtCore
//! {root}/Qt/include/{tag}/QtGui
//! ```
//!
//! where `{tag}` is the platform identifier, except on Windows where the Qt
//! headers are laid out under the OS identifier instead.
//!
//! Resolution is pure: the dependency root is threaded in as a parameter and
//! the single `OPTICKSDEPENDENCIES` read happens at the program boundary.

use std::path::Path;

use tracing::warn;

use crate::delta::ConfigDelta;
use crate::env::{BuildEnvironment, Target};
use crate::error::{Dependency, DependencyNotFound};

/// Subdirectory of the dependency root holding the widget library.
const QWT_SUBDIR: &str = "qwt";
/// Subdirectory of the dependency root holding the toolkit.
const QT_SUBDIR: &str = "Qt";

/// OS identifier that selects the Windows path layout.
const WINDOWS_OS: &str = "windows";

/// Compute the flag delta for Qwt and Qt from a single dependency root.
///
/// Both packages live under the same root, so presence collapses to one
/// check: an absent (or empty) root fails naming Qwt. Use [`resolve_split`]
/// when the two roots are supplied independently and the toolkit can be
/// missing on its own.
pub fn resolve(root: Option<&Path>, target: &Target) -> Result<ConfigDelta, DependencyNotFound> {
    let root = non_empty(root).ok_or(DependencyNotFound {
        which: Dependency::Qwt,
    })?;
    let widget_root = root.join(QWT_SUBDIR);
    let toolkit_root = root.join(QT_SUBDIR);
    resolve_split(Some(&widget_root), Some(&toolkit_root), target)
}

/// Compute the flag delta from independently-supplied package roots.
///
/// Fails naming Qwt when the widget root is absent; the toolkit check only
/// runs once the widget root resolved.
pub fn resolve_split(
    widget_root: Option<&Path>,
    toolkit_root: Option<&Path>,
    target: &Target,
) -> Result<ConfigDelta, DependencyNotFound> {
    let widget_root = non_empty(widget_root).ok_or(DependencyNotFound {
        which: Dependency::Qwt,
    })?;
    let toolkit_root = non_empty(toolkit_root).ok_or(DependencyNotFound {
        which: Dependency::Qt,
    })?;

    let mut libpath = widget_root.join("lib").join(&target.platform);
    let mut lib = "qwt";
    let mut include_platform = target.platform.as_str();
    if target.os == WINDOWS_OS {
        // Windows nests the build mode under the platform and links the
        // versioned library; Qt headers sit under the OS tag.
        libpath.push(&target.mode);
        lib = "qwt5";
        include_platform = target.os.as_str();
    }

    let toolkit_include = toolkit_root.join("include").join(include_platform);
    let cxxflags = vec![
        format!("-I{}", widget_root.join("include").display()),
        format!("-I{}", toolkit_include.join("QtCore").display()),
        format!("-I{}", toolkit_include.join("QtGui").display()),
    ];

    Ok(ConfigDelta {
        cxxflags,
        libpath: Some(libpath.display().to_string()),
        libs: vec![lib.to_string()],
    })
}

/// Resolve and merge into `env`, or warn and leave `env` untouched.
///
/// Absence is never fatal here: a missing dependency tree degrades to a
/// `warn!` and the consuming build simply proceeds without the flags. Calling
/// this twice on the same environment appends duplicate flags (see
/// `BuildEnvironment::apply`).
pub fn locate_and_configure(env: &mut BuildEnvironment, root: Option<&Path>) {
    match resolve(root, &env.target) {
        Ok(delta) => env.apply(&delta),
        Err(err) => warn!("{}", err),
    }
}

/// `None` and `Some("")` are both absent: an unset variable and an empty one
/// behave identically.
fn non_empty(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !p.as_os_str().is_empty())
}
