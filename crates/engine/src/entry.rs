use crate::error::{EngineError, Result};
use crate::permissions::Permissions;
use chrono::{DateTime, Local};
use std::fs::Metadata;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    /// Anything that is not a directory.
    File,
}

impl EntryKind {
    #[must_use]
    pub const fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// One member of a directory listing with the metadata shown for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
    pub size: u64,
    pub permissions: Permissions,
    pub modified: DateTime<Local>,
}

impl Entry {
    /// Stat `path` (following symlinks) and build the entry named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Metadata`] if the entry cannot be queried, which
    /// includes the case where it disappeared after enumeration.
    pub fn query(name: String, path: &Path) -> Result<Self> {
        let meta = std::fs::metadata(path).map_err(|source| EngineError::Metadata {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_metadata(name, path, &meta)
    }

    /// # Errors
    ///
    /// Returns [`EngineError::Metadata`] when the platform reports no
    /// modification time.
    pub fn from_metadata(name: String, path: &Path, meta: &Metadata) -> Result<Self> {
        let modified = meta.modified().map_err(|source| EngineError::Metadata {
            path: path.to_path_buf(),
            source,
        })?;
        let kind = if meta.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        Ok(Self {
            name,
            kind,
            size: meta.len(),
            permissions: Permissions::from_metadata(meta),
            modified: DateTime::<Local>::from(modified),
        })
    }

    /// Name as shown in the table; directories get a `./` prefix.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.kind.is_dir() {
            format!("./{}", self.name)
        } else {
            self.name.clone()
        }
    }
}
