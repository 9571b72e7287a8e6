use std::collections::TryReserveError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("cannot open directory '{path}': {source}")]
    DirectoryOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read directory '{path}': {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot stat '{path}': {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot allocate entry buffer: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("path '{path}' is {len} bytes long, limit is {max}")]
    PathTooLong { path: PathBuf, len: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, EngineError>;
