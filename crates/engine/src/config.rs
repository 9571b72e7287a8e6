use derive_builder::Builder;
use std::path::PathBuf;

/// Display settings for a single listing run.
///
/// Built once from the command line and passed by reference to both
/// [`crate::listing::enumerate`] and [`crate::presentation::render`].
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct DisplayConfig {
    /// Directory to list. The CLI always uses the working directory.
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    /// Include entries whose name starts with `.`.
    #[builder(default)]
    pub show_hidden: bool,
    /// Render permissions as octal digits instead of `-rwxr-xr-x`.
    #[builder(default)]
    pub numeric_permissions: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            show_hidden: false,
            numeric_permissions: false,
        }
    }
}
