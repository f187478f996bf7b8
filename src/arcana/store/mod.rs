//! # Storage Layer
//!
//! Saved readings live in a [`ReadingStore`], which sits on top of a plain
//! key-value string substrate ([`KeyValueStore`]). The whole history is one
//! value under one key: a JSON array of [`ReadingRecord`]s, oldest first.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: Production storage, one `<key>.json` file per key
//!   in the data directory, written atomically (temp file, then rename).
//! - [`memory::MemBackend`]: In-memory storage for testing. Can simulate
//!   read and write failures.
//!
//! ## Ordering and indexes
//!
//! Records are kept in the order they were appended. [`ReadingStore::list`]
//! hands them out newest first for display, but every index accepted by the
//! store ([`ReadingStore::get`], [`ReadingStore::delete_at`]) is a *stored*
//! index. Converting a display number into a stored index is the job of
//! [`crate::index::HistoryIndex`].
//!
//! ## Persistence
//!
//! The substrate is read lazily on first access and cached. Every mutation
//! writes the full updated sequence; the cache is only replaced after the
//! write succeeded, so a failed write leaves both the cache and the stored
//! value as they were.

use crate::error::{ArcanaError, Result};
use crate::model::ReadingRecord;
use tracing::debug;

pub mod fs;
pub mod memory;

/// Key under which the reading history is stored unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "tarot_readings";

/// A string-to-string store addressed by well-known keys.
///
/// Read failures must surface as [`ArcanaError::StorageRead`] and write
/// failures as [`ArcanaError::StorageWrite`].
pub trait KeyValueStore {
    /// Returns `Ok(None)` when nothing has been stored under `key` yet.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Serializes records, oldest first.
pub fn encode(records: &[ReadingRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Parses a stored value. Blank input is an empty history; anything else
/// that is not a well-formed record array is [`ArcanaError::CorruptStore`].
pub fn decode(raw: &str) -> Result<Vec<ReadingRecord>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(|e| ArcanaError::CorruptStore(e.to_string()))
}

pub struct ReadingStore<B: KeyValueStore> {
    backend: B,
    key: String,
    records: Option<Vec<ReadingRecord>>,
}

impl<B: KeyValueStore> ReadingStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            records: None,
        }
    }

    /// All records in stored order (oldest first).
    pub fn records(&mut self) -> Result<&[ReadingRecord]> {
        self.load()
    }

    /// All records newest first, for display.
    pub fn list(&mut self) -> Result<Vec<&ReadingRecord>> {
        Ok(self.load()?.iter().rev().collect())
    }

    pub fn len(&mut self) -> Result<usize> {
        Ok(self.load()?.len())
    }

    pub fn is_empty(&mut self) -> Result<bool> {
        Ok(self.load()?.is_empty())
    }

    pub fn get(&mut self, stored_index: usize) -> Result<&ReadingRecord> {
        let records = self.load()?;
        let len = records.len();
        records.get(stored_index).ok_or(ArcanaError::IndexOutOfRange {
            index: stored_index,
            len,
        })
    }

    pub fn append(&mut self, record: ReadingRecord) -> Result<()> {
        let mut next = self.load()?.to_vec();
        next.push(record);
        self.commit(next)
    }

    /// Removes the record at `stored_index` and returns it.
    pub fn delete_at(&mut self, stored_index: usize) -> Result<ReadingRecord> {
        let mut next = self.load()?.to_vec();
        if stored_index >= next.len() {
            return Err(ArcanaError::IndexOutOfRange {
                index: stored_index,
                len: next.len(),
            });
        }
        let removed = next.remove(stored_index);
        self.commit(next)?;
        Ok(removed)
    }

    fn load(&mut self) -> Result<&[ReadingRecord]> {
        if self.records.is_none() {
            let records = match self.backend.get(&self.key)? {
                Some(raw) => decode(&raw)?,
                None => Vec::new(),
            };
            debug!(key = %self.key, count = records.len(), "loaded reading history");
            self.records = Some(records);
        }
        Ok(self.records.as_deref().unwrap_or_default())
    }

    fn commit(&mut self, records: Vec<ReadingRecord>) -> Result<()> {
        let raw = encode(&records)?;
        self.backend.set(&self.key, &raw)?;
        debug!(key = %self.key, count = records.len(), "persisted reading history");
        self.records = Some(records);
        Ok(())
    }
}
