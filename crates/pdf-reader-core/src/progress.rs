//! Persistent reading progress
//!
//! The record is a single JSON object mapping document paths to the last
//! viewed page index. Every write reloads the record, applies one change and
//! replaces the whole file through a temporary file in the same directory, so
//! a crash mid-write leaves either the old or the new record on disk.

use crate::types::*;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Document path → last viewed page index
pub type ProgressRecord = BTreeMap<String, usize>;

/// Key under which a document's progress is stored: the absolute form of
/// `path`, with symlinks left as they are. Non-UTF-8 paths have no key.
pub fn document_key(path: &Path) -> Result<String> {
    let unusable = |reason: String| ReaderError::DocumentOpen {
        path: path.to_path_buf(),
        reason,
    };
    std::path::absolute(path)
        .map_err(|e| unusable(e.to_string()))?
        .into_os_string()
        .into_string()
        .map_err(|_| unusable("path is not valid UTF-8".to_string()))
}

/// File-backed progress store. Holds no cached state between calls.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    record_path: PathBuf,
}

impl ProgressStore {
    pub fn new(record_path: impl Into<PathBuf>) -> Self {
        Self {
            record_path: record_path.into(),
        }
    }

    pub fn record_path(&self) -> &Path {
        &self.record_path
    }

    /// Read the whole record. A missing record is empty, anything unreadable is an error.
    pub fn load_all(&self) -> Result<ProgressRecord> {
        let contents = match std::fs::read_to_string(&self.record_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ProgressRecord::new()),
            Err(e) => return Err(self.corrupt(e)),
        };

        serde_json::from_str(&contents).map_err(|e| self.corrupt(e))
    }

    /// Stored page index for `document`, if any
    pub fn lookup(&self, document: &Path) -> Result<Option<usize>> {
        let key = document_key(document)?;
        Ok(self.load_all()?.get(&key).copied())
    }

    /// Stored page index for `document`, or 0
    pub fn get(&self, document: &Path) -> Result<usize> {
        Ok(self.lookup(document)?.unwrap_or(0))
    }

    /// Record `page_index` for `document`, rewriting the whole record
    pub fn save(&self, document: &Path, page_index: usize) -> Result<()> {
        let key = document_key(document)?;
        let mut record = self.load_all()?;
        record.insert(key, page_index);
        self.write_all(&record)?;
        log::info!("Saved progress: page {} of {}", page_index + 1, document.display());
        Ok(())
    }

    /// Drop the entry for `document`. Returns whether one existed.
    pub fn forget(&self, document: &Path) -> Result<bool> {
        let key = document_key(document)?;
        let mut record = self.load_all()?;
        if record.remove(&key).is_none() {
            return Ok(false);
        }
        self.write_all(&record)?;
        log::info!("Removed progress for {}", document.display());
        Ok(true)
    }

    /// Replace the record with an empty one, whatever its current contents
    pub fn reset(&self) -> Result<()> {
        self.write_all(&ProgressRecord::new())?;
        log::info!("Reset progress record {}", self.record_path.display());
        Ok(())
    }

    fn write_all(&self, record: &ProgressRecord) -> Result<()> {
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| self.write_failed(io::Error::other(e)))?;

        let dir = match self.record_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.write_failed(e))?;
        tmp.write_all(json.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| self.write_failed(e))?;
        tmp.persist(&self.record_path)
            .map_err(|e| self.write_failed(e.error))?;

        Ok(())
    }

    fn corrupt(&self, reason: impl std::fmt::Display) -> ReaderError {
        ReaderError::StoreCorrupt {
            path: self.record_path.clone(),
            reason: reason.to_string(),
        }
    }

    fn write_failed(&self, source: io::Error) -> ReaderError {
        ReaderError::StoreWrite {
            path: self.record_path.clone(),
            source,
        }
    }
}
