// src/version.rs
//! Version strings for the `-v` flag and the help banner.

/// Application version derived from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Line printed by `-v`.
#[must_use]
pub fn banner() -> String {
    format!("Running ls2 v{VERSION} by unium @ unified")
}
