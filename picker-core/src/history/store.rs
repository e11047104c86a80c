//! History storage trait

use super::error::StorageError;

/// Number of most recent entries a reset keeps by default.
pub const DEFAULT_KEEP_TAIL: usize = 2;

/// What a tail-preserving reset did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The group had no history yet; nothing was touched.
    NoHistory,
    /// History was rewritten down to its most recent `kept` entries.
    Truncated { kept: usize, discarded: usize },
}

impl ResetOutcome {
    pub fn was_reset(&self) -> bool {
        matches!(self, ResetOutcome::Truncated { .. })
    }
}

/// Per-group append-only log of previously chosen values
///
/// The only removal path is [`HistoryStore::reset_keeping_tail`].
pub trait HistoryStore {
    /// All recorded values for `group`, oldest first. Empty when the group has
    /// never been picked from.
    fn list(&self, group: &str) -> Result<Vec<String>, StorageError>;

    /// Record `value` as the newest entry, creating storage if needed.
    fn append(&self, group: &str, value: &str) -> Result<(), StorageError>;

    /// Drop everything except the `keep` most recent entries.
    fn reset_keeping_tail(&self, group: &str, keep: usize) -> Result<ResetOutcome, StorageError>;
}

/// Reject values that would not survive the one-value-per-line format.
pub(crate) fn validate_entry(value: &str) -> Result<(), StorageError> {
    if value.is_empty() || value.contains(['\n', '\r']) {
        return Err(StorageError::InvalidEntry(value.to_string()));
    }
    Ok(())
}

/// The slice of `entries` a reset keeping `keep` entries retains.
pub(crate) fn tail(entries: &[String], keep: usize) -> &[String] {
    &entries[entries.len().saturating_sub(keep)..]
}
