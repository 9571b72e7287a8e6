// crates/engine/src/presentation.rs
use crate::config::DisplayConfig;
use crate::entry::Entry;
use chrono::{DateTime, Local};
use std::fmt::Write;

pub const COLOR_RESET: &str = "\x1B[0m";
pub const COLOR_FILE: &str = "\x1B[0;36m";
pub const COLOR_DIR: &str = "\x1B[0;34m";
pub const COLOR_YELLOW: &str = "\x1B[33m";

const SIZE_WIDTH: usize = 12;
const PERM_WIDTH: usize = 11;
const SEPARATOR_WIDTH: usize = 86;
const NAME_TITLE: &str = "Name";

/// `ctime(3)` layout without the trailing newline.
const TIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Width of the name column: longest bare name plus two.
///
/// The extra two columns leave room for the `./` directory prefix.
#[must_use]
pub fn name_width(entries: &[Entry]) -> usize {
    entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0)
        + 2
}

#[must_use]
pub fn format_time(time: &DateTime<Local>) -> String {
    time.format(TIME_FORMAT).to_string()
}

#[must_use]
pub fn permission_field(entry: &Entry, config: &DisplayConfig) -> String {
    if config.numeric_permissions {
        entry.permissions.octal()
    } else {
        entry.permissions.symbolic(entry.kind)
    }
}

#[must_use]
pub const fn color_for(entry: &Entry) -> &'static str {
    if entry.kind.is_dir() { COLOR_DIR } else { COLOR_FILE }
}

/// Render the header, separator and one row per entry, in listing order.
#[must_use]
pub fn render(entries: &[Entry], config: &DisplayConfig) -> String {
    let width = name_width(entries);
    let header_width = width.max(NAME_TITLE.len());
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "{NAME_TITLE:<header_width$}  {:<SIZE_WIDTH$}  {:<PERM_WIDTH$} Last Modified",
        "Size (b)", "Permissions"
    );
    let _ = writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH));

    for entry in entries {
        render_row(&mut out, entry, width, config);
    }
    out
}

fn render_row(out: &mut String, entry: &Entry, width: usize, config: &DisplayConfig) {
    let _ = writeln!(
        out,
        "{color}{name:<width$}{COLOR_RESET}  {size:<SIZE_WIDTH$}  {perm:<PERM_WIDTH$} {COLOR_YELLOW}{time}{COLOR_RESET}",
        color = color_for(entry),
        name = entry.display_name(),
        size = entry.size,
        perm = permission_field(entry, config),
        time = format_time(&entry.modified),
    );
}
