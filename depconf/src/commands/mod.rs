//! CLI command implementations.
//!
//! Commands depend on `depconf-core` for all resolution logic and on the
//! config layer for environment input; they never read `std::env::var`
//! directly.

pub mod locate;
pub mod probe;
