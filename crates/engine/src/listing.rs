use crate::entry::Entry;
use crate::error::{EngineError, Result};
use crate::path_security::{PathLimits, check_entry_path};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

/// Entries of one directory, sorted by name.
pub type Listing = Vec<Entry>;

/// Whether `name` is hidden by default.
#[must_use]
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Case-insensitive ASCII ordering of entry names.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// Stable sort by name; names equal ignoring case keep their relative order.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| compare_names(&a.name, &b.name));
}

/// Anchor a relative `dir` at the working directory.
///
/// A working directory that has been removed cannot be resolved; reading it
/// would otherwise succeed on some platforms and yield an empty listing.
///
/// # Errors
///
/// Returns [`EngineError::DirectoryOpen`] if the working directory is gone.
pub fn resolve_root(dir: &Path) -> Result<PathBuf> {
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|source| EngineError::DirectoryOpen {
        path: dir.to_path_buf(),
        source,
    })?;
    if dir == Path::new(".") {
        Ok(cwd)
    } else {
        Ok(cwd.join(dir))
    }
}

/// List `dir` in a single pass and return its entries sorted by name.
///
/// # Errors
///
/// Fails on the first problem: the directory cannot be opened or read, an
/// entry path is too long, an entry cannot be stat'ed, or the entry buffer
/// cannot grow.
pub fn enumerate(dir: &Path, show_hidden: bool) -> Result<Listing> {
    enumerate_with_limits(dir, show_hidden, &PathLimits::default())
}

/// [`enumerate`] with explicit path length limits.
///
/// # Errors
///
/// See [`enumerate`].
pub fn enumerate_with_limits(dir: &Path, show_hidden: bool, limits: &PathLimits) -> Result<Listing> {
    let dir = &resolve_root(dir)?;
    let read_dir = fs::read_dir(dir).map_err(|source| EngineError::DirectoryOpen {
        path: dir.to_path_buf(),
        source,
    })?;
    log::debug!("reading directory {}", dir.display());

    let mut entries = Listing::new();
    for item in read_dir {
        let item = item.map_err(|source| EngineError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;

        let file_name = item.file_name();
        let name = file_name.to_string_lossy().into_owned();
        if !show_hidden && is_hidden(&name) {
            continue;
        }

        let path = check_entry_path(dir, &file_name, limits)?;
        let entry = Entry::query(name, &path)?;
        entries.try_reserve(1)?;
        entries.push(entry);
    }

    sort_entries(&mut entries);
    log::debug!("collected {} entries from {}", entries.len(), dir.display());
    Ok(entries)
}
