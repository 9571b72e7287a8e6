// crates/engine/src/lib.rs
pub mod config;
pub mod entry;
pub mod error;
pub mod listing;
pub mod path_security;
pub mod permissions;
pub mod presentation;

use crate::config::DisplayConfig;
use crate::error::Result;

/// List `config.root` and render the table.
///
/// Nothing is rendered unless every entry was read successfully.
///
/// # Errors
///
/// Returns the first enumeration failure; see [`listing::enumerate`].
pub fn run(config: &DisplayConfig) -> Result<String> {
    let entries = listing::enumerate(&config.root, config.show_hidden)?;
    Ok(presentation::render(&entries, config))
}
