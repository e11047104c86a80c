//! History storage error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors from durable history reads and writes
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to read history file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write history file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid history entry {0:?}: entries must be non-empty single-line values")]
    InvalidEntry(String),

    #[error("invalid group name {0:?} for history storage")]
    InvalidGroupName(String),
}
