//! Path length limits
//!
//! Entry paths are built dynamically, so nothing is ever truncated. Paths the
//! platform could not address are rejected up front instead of failing later
//! with a confusing `stat` error.
//!
//! # Example
//!
//! ```rust
//! use ls2_engine::path_security::{check_entry_path, PathLimits};
//! use std::ffi::OsStr;
//! use std::path::Path;
//!
//! let limits = PathLimits::default();
//! let path = check_entry_path(Path::new("."), OsStr::new("Cargo.toml"), &limits).unwrap();
//! assert_eq!(path, Path::new("./Cargo.toml"));
//! ```

use crate::error::{EngineError, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Length limits applied to entry paths, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathLimits {
    /// Whole joined path (`PATH_MAX`).
    pub max_path: usize,
    /// Single path component (`NAME_MAX`).
    pub max_name: usize,
}

impl Default for PathLimits {
    fn default() -> Self {
        Self {
            max_path: 4096,
            max_name: 255,
        }
    }
}

/// Join `name` onto `dir`, enforcing `limits`.
///
/// # Errors
///
/// Returns [`EngineError::PathTooLong`] if the name or the joined path
/// exceeds its limit.
pub fn check_entry_path(dir: &Path, name: &OsStr, limits: &PathLimits) -> Result<PathBuf> {
    let path = dir.join(name);

    if name.len() > limits.max_name {
        return Err(EngineError::PathTooLong {
            path,
            len: name.len(),
            max: limits.max_name,
        });
    }

    let len = path.as_os_str().len();
    if len > limits.max_path {
        return Err(EngineError::PathTooLong {
            path,
            len,
            max: limits.max_path,
        });
    }

    Ok(path)
}
