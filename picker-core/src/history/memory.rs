//! In-memory history store for tests and dry runs

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::error::StorageError;
use super::store::{HistoryStore, ResetOutcome, tail, validate_entry};

/// History kept in a map, lost when dropped
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    groups: Mutex<HashMap<String, Vec<String>>>,
    fail_writes: AtomicBool,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a group's history.
    pub fn with_history<I, S>(self, group: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lock()
            .insert(group.to_string(), entries.into_iter().map(Into::into).collect());
        self
    }

    /// Make every subsequent append and reset fail, as a full disk would.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<String>>> {
        self.groups.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_writable(&self, group: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Write {
                path: PathBuf::from(format!("memory://{group}")),
                source: io::Error::other("writes disabled"),
            });
        }
        Ok(())
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn list(&self, group: &str) -> Result<Vec<String>, StorageError> {
        Ok(self.lock().get(group).cloned().unwrap_or_default())
    }

    fn append(&self, group: &str, value: &str) -> Result<(), StorageError> {
        validate_entry(value)?;
        self.check_writable(group)?;
        self.lock()
            .entry(group.to_string())
            .or_default()
            .push(value.to_string());
        Ok(())
    }

    fn reset_keeping_tail(&self, group: &str, keep: usize) -> Result<ResetOutcome, StorageError> {
        self.check_writable(group)?;
        let mut groups = self.lock();
        let Some(entries) = groups.get_mut(group) else {
            return Ok(ResetOutcome::NoHistory);
        };
        let before = entries.len();
        *entries = tail(entries, keep).to_vec();
        Ok(ResetOutcome::Truncated {
            kept: entries.len(),
            discarded: before - entries.len(),
        })
    }
}
