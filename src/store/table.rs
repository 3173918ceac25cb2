//! The [`PhraseStore`] table — load-once, lookup-by-id content store.
//!
//! The backing file is a structured JSON array of records.  The original
//! deployment of this data re-derived it from a JavaScript source file with
//! string surgery on every request; the store here reads the real table once
//! and indexes it, which removes that whole class of parse fragility.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::store::record::PhraseRecord;

// ---------------------------------------------------------------------------
// StoreError
// ---------------------------------------------------------------------------

/// All errors that can arise from the content store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read.
    #[error("failed to read phrase table: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not a valid JSON array of records.
    #[error("failed to parse phrase table: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share the same id.  Ids must be unique across the table.
    #[error("duplicate record id: {0}")]
    DuplicateId(String),

    /// No record exists with the requested id.
    #[error("no record with id: {0}")]
    NotFound(String),
}

// ---------------------------------------------------------------------------
// PhraseStore
// ---------------------------------------------------------------------------

/// Immutable phrase table with O(1) id lookup.
///
/// Construct with [`PhraseStore::load`] (from the JSON table on disk) or
/// [`PhraseStore::from_records`] (from an in-memory vector, useful in tests).
/// Both reject duplicate ids.
pub struct PhraseStore {
    records: Vec<PhraseRecord>,
    index: HashMap<String, usize>,
}

impl PhraseStore {
    /// Load the table from a JSON file.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Io`] — the file could not be read.
    /// - [`StoreError::Parse`] — the file is not a JSON array of records.
    /// - [`StoreError::DuplicateId`] — two records share an id.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path)?;
        let records: Vec<PhraseRecord> = serde_json::from_str(&content)?;
        Self::from_records(records)
    }

    /// Build a store from already-deserialised records.
    ///
    /// # Errors
    ///
    /// [`StoreError::DuplicateId`] when two records share an id.
    pub fn from_records(records: Vec<PhraseRecord>) -> Result<Self, StoreError> {
        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if index.insert(record.id.clone(), i).is_some() {
                return Err(StoreError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records, index })
    }

    /// Look up a record by id.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] when no record has the given id.  The miss is
    /// propagated, never defaulted.
    pub fn get(&self, id: &str) -> Result<&PhraseRecord, StoreError> {
        self.index
            .get(id)
            .map(|&i| &self.records[i])
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// All records, in table order.
    pub fn all(&self) -> &[PhraseRecord] {
        &self.records
    }

    /// First record whose `country_code` matches `code` (case-insensitive),
    /// or `None`.
    pub fn find_by_country_code(&self, code: &str) -> Option<&PhraseRecord> {
        self.records
            .iter()
            .find(|r| r.country_code.eq_ignore_ascii_case(code))
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
