use analysis::{analyze, hash_text};
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use nlquery::StringFilters;

use crate::error::StoreError;
use crate::filter::matches;
use crate::record::StoredString;

/// In-memory store keyed by content fingerprint.
///
/// Safe to share across request handlers without external locking; the
/// entry API keeps check-and-insert atomic under concurrent writers.
#[derive(Debug, Default)]
pub struct StringStore {
    entries: DashMap<String, StoredString>,
}

impl StringStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Analyze `value` and store it under its fingerprint.
    ///
    /// Returns the stored record, or [`StoreError::Duplicate`] when the
    /// fingerprint is already present.
    pub fn insert(&self, value: &str) -> Result<StoredString, StoreError> {
        let properties = analyze(value);
        let id = properties.sha256_hex.clone();

        match self.entries.entry(id.clone()) {
            Entry::Occupied(_) => Err(StoreError::Duplicate(id)),
            Entry::Vacant(slot) => {
                let record = StoredString {
                    id,
                    value: value.to_string(),
                    properties,
                    created_at: Utc::now(),
                };
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    /// Look up a string by value: hash first, then key lookup.
    pub fn get(&self, value: &str) -> Option<StoredString> {
        self.entries.get(&hash_text(value)).map(|entry| entry.value().clone())
    }

    /// Remove a string by value, returning the removed record if present.
    pub fn remove(&self, value: &str) -> Option<StoredString> {
        self.entries.remove(&hash_text(value)).map(|(_, record)| record)
    }

    /// Apply a filter set to the stored population.
    ///
    /// Result order is unspecified (iteration order of the sharded map).
    pub fn filter(&self, filters: &StringFilters) -> Vec<StoredString> {
        self.entries
            .iter()
            .filter(|entry| matches(&entry.properties, filters))
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
