//! Per-entity cache of generated code.
//!
//! [`MetadataStore`] is an immutable snapshot: every update returns a new
//! store and leaves the receiver untouched. Snapshots share their storage
//! until one of them is modified, so holding on to old snapshots is cheap.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Last generated output for one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// Generated markup.
    #[serde(rename = "react-code")]
    pub react_code: String,
    /// Class string (web) or style object literal (native).
    pub styles: String,
    /// Element name the markup is rooted at.
    pub element: String,
}

impl MetadataRecord {
    /// Create a record.
    pub fn new(
        react_code: impl Into<String>,
        styles: impl Into<String>,
        element: impl Into<String>,
    ) -> Self {
        Self {
            react_code: react_code.into(),
            styles: styles.into(),
            element: element.into(),
        }
    }

    /// Empty record for a freshly created entity: `<div></div>`.
    pub fn initialize(element: &str) -> Self {
        Self::new(format!("<{}></{}>", element, element), "", element)
    }
}

/// Snapshot of metadata records keyed by entity id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataStore {
    records: Arc<IndexMap<String, MetadataRecord>>,
}

impl MetadataStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty store.
    pub fn clear() -> Self {
        Self::default()
    }

    /// Insert or replace the record for an id.
    #[must_use]
    pub fn sync(&self, id: impl Into<String>, record: MetadataRecord) -> Self {
        let mut next = self.clone();
        Arc::make_mut(&mut next.records).insert(id.into(), record);
        next
    }

    /// Get the record for an id.
    pub fn get(&self, id: &str) -> Option<&MetadataRecord> {
        self.records.get(id)
    }

    /// Drop the record for an id. Returns an unchanged snapshot when absent.
    #[must_use]
    pub fn remove(&self, id: &str) -> Self {
        if !self.has(id) {
            return self.clone();
        }
        let mut next = self.clone();
        Arc::make_mut(&mut next.records).shift_remove(id);
        next
    }

    /// Apply several upserts at once, in order.
    #[must_use]
    pub fn batch_update<I>(&self, updates: I) -> Self
    where
        I: IntoIterator<Item = (String, MetadataRecord)>,
    {
        let mut next = self.clone();
        let records = Arc::make_mut(&mut next.records);
        for (id, record) in updates {
            records.insert(id, record);
        }
        next
    }

    /// Check if an id has a record.
    pub fn has(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Ids with records, in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(|k| k.as_str())
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
