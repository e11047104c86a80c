//! Newline-delimited file history store
//!
//! Each group gets `<dir>/<group>.txt` holding one chosen value per line, no
//! header. The file is created lazily on first append.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::error::StorageError;
use super::store::{HistoryStore, ResetOutcome, tail, validate_entry};
use crate::config::is_safe_group_name;

/// History file extension
const HISTORY_EXT: &str = "txt";

/// File-backed history store rooted at a cache directory
#[derive(Debug, Clone)]
pub struct FileHistoryStore {
    dir: PathBuf,
}

impl FileHistoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the history file for `group`.
    pub fn path_for(&self, group: &str) -> Result<PathBuf, StorageError> {
        if !is_safe_group_name(group) {
            return Err(StorageError::InvalidGroupName(group.to_string()));
        }
        Ok(self.dir.join(format!("{group}.{HISTORY_EXT}")))
    }

    fn read_entries(path: &Path) -> Result<Option<Vec<String>>, StorageError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Ok(Some(
            content
                .lines()
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        ))
    }

    fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Write {
            path: self.dir.clone(),
            source,
        })
    }

    /// Replace the file at `path` with `entries` via a sibling temp file, so a
    /// failed write leaves the previous content in place.
    fn rewrite(&self, path: &Path, entries: &[String]) -> Result<(), StorageError> {
        let write_err = |source| StorageError::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(write_err)?;
        for entry in entries {
            writeln!(tmp, "{entry}").map_err(write_err)?;
        }
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}

/// Whether appending to `file` starts a fresh line. True for an empty file.
fn ends_with_newline(file: &mut fs::File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

impl HistoryStore for FileHistoryStore {
    fn list(&self, group: &str) -> Result<Vec<String>, StorageError> {
        let path = self.path_for(group)?;
        let entries = Self::read_entries(&path)?.unwrap_or_default();
        debug!(group, count = entries.len(), "loaded history");
        Ok(entries)
    }

    fn append(&self, group: &str, value: &str) -> Result<(), StorageError> {
        validate_entry(value)?;
        let path = self.path_for(group)?;
        self.ensure_dir()?;

        let write_err = |source| StorageError::Write {
            path: path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&path)
            .map_err(write_err)?;
        if !ends_with_newline(&mut file).map_err(write_err)? {
            writeln!(file).map_err(write_err)?;
        }
        writeln!(file, "{value}").map_err(write_err)?;

        debug!(group, value, "appended history entry");
        Ok(())
    }

    fn reset_keeping_tail(&self, group: &str, keep: usize) -> Result<ResetOutcome, StorageError> {
        let path = self.path_for(group)?;
        let Some(entries) = Self::read_entries(&path)? else {
            debug!(group, "no history to reset");
            return Ok(ResetOutcome::NoHistory);
        };

        let kept = tail(&entries, keep);
        self.rewrite(&path, kept)?;

        let outcome = ResetOutcome::Truncated {
            kept: kept.len(),
            discarded: entries.len() - kept.len(),
        };
        info!(group, keep, ?outcome, "history reset");
        Ok(outcome)
    }
}
