//! In-memory record store

use crate::types::{Record, RecordId, RecordPatch};
use tracing::debug;

/// Ordered, in-memory collection of records
///
/// Ids are expected to be unique; the remote resource guarantees this and the
/// store does not re-check it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current contents and install `records` in the order given
    pub fn replace_all(&mut self, records: Vec<Record>) {
        debug!(
            "Replacing {} records with {}",
            self.records.len(),
            records.len()
        );
        self.records = records;
    }

    /// Prepend a record (newest first)
    pub fn insert_front(&mut self, record: Record) {
        self.records.insert(0, record);
    }

    /// Merge `patch` into every record with the given id
    ///
    /// Returns the number of records that matched. Zero is not an error.
    pub fn update(&mut self, id: RecordId, patch: &RecordPatch) -> usize {
        let mut matched = 0;
        for record in self.records.iter_mut().filter(|r| r.id == id) {
            *record = record.patched(patch);
            matched += 1;
        }
        matched
    }

    /// Remove every record with the given id
    ///
    /// Returns the number of records removed. Zero is not an error.
    pub fn remove(&mut self, id: RecordId) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        before - self.records.len()
    }

    /// All records in insertion order
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    /// Look up a record by id
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<Record>> for RecordStore {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}
