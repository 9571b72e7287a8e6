//! Owner/group/other access bits and their two textual forms.

use crate::entry::EntryKind;
use std::fs::Metadata;

const CLASS_BITS: [(u32, char); 9] = [
    (0o400, 'r'),
    (0o200, 'w'),
    (0o100, 'x'),
    (0o040, 'r'),
    (0o020, 'w'),
    (0o010, 'x'),
    (0o004, 'r'),
    (0o002, 'w'),
    (0o001, 'x'),
];

/// The nine `rwx` bits of a mode, already masked with `0o777`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions(u32);

impl Permissions {
    #[must_use]
    pub const fn from_mode(mode: u32) -> Self {
        Self(mode & 0o777)
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[cfg(unix)]
    #[must_use]
    pub fn from_metadata(meta: &Metadata) -> Self {
        use std::os::unix::fs::PermissionsExt;
        Self::from_mode(meta.permissions().mode())
    }

    /// Synthesized from the read-only flag where no mode bits exist.
    #[cfg(not(unix))]
    #[must_use]
    pub fn from_metadata(meta: &Metadata) -> Self {
        let mode = match (meta.is_dir(), meta.permissions().readonly()) {
            (true, false) => 0o777,
            (true, true) => 0o555,
            (false, false) => 0o666,
            (false, true) => 0o444,
        };
        Self::from_mode(mode)
    }

    /// 10-character form such as `drwxr-xr-x`.
    #[must_use]
    pub fn symbolic(self, kind: EntryKind) -> String {
        let mut out = String::with_capacity(10);
        out.push(if kind.is_dir() { 'd' } else { '-' });
        for (bit, ch) in CLASS_BITS {
            out.push(if self.0 & bit != 0 { ch } else { '-' });
        }
        out
    }

    /// Three octal digits, e.g. `644`.
    #[must_use]
    pub fn octal(self) -> String {
        format!("{:03o}", self.0)
    }
}
