//! `depconf probe` — report whether the qwt build tool is reachable.

use anyhow::Result;

use depconf_core::probe;

/// `depconf probe`. Returns whether the tool was found; the caller maps
/// `false` to a non-zero exit code.
pub fn cmd_probe() -> Result<bool> {
    let found = probe::exists();
    if found {
        println!("found");
    } else {
        println!("not found");
    }
    Ok(found)
}
