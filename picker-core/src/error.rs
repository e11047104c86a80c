//! Error types for picker-core

use thiserror::Error;

use crate::config::ConfigError;
use crate::history::StorageError;

/// Top-level error type for picker-core
#[derive(Error, Debug)]
pub enum PickerError {
    #[error("the {group} items list is empty")]
    EmptyGroup { group: String },

    #[error("group not found: {name}. Valid options: [{}]", .valid.join(", "))]
    GroupNotFound { name: String, valid: Vec<String> },

    #[error("no group provided. Pass --group or set default_group in the config")]
    NoGroupSelected,

    #[error(
        "every item in {group} is still in the retained history after a reset; \
         run `rp reset --all` to start over"
    )]
    Exhausted { group: String },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
