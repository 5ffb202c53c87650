use serde::{Deserialize, Serialize};

/// A half-open range of store keys, `start..end`, compared byte-wise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyRange {
    pub start: String,
    pub end: String,
}

impl KeyRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Returns true if `key` lies within `start..end`.
    pub fn contains(&self, key: &str) -> bool {
        self.start.as_str() <= key && key < self.end.as_str()
    }
}

/// A record as persisted by the store: the key plus the unindexed owner field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub key: String,
    pub owner: String,
}

impl StoredRecord {
    pub fn new(key: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            owner: owner.into(),
        }
    }
}

/// A range read made before a commit, together with what it returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedRange {
    pub range: KeyRange,
    pub limit: usize,
    pub keys: Vec<String>,
}

/// An optimistic transaction.
///
/// Stores must apply a transaction atomically: every observed range is
/// re-scanned with its limit at commit time, and if any result differs from
/// the recorded keys the commit is rejected with
/// [`RepositoryError::ConcurrentModification`](super::RepositoryError::ConcurrentModification)
/// and nothing is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    pub observed: Vec<ObservedRange>,
    pub puts: Vec<StoredRecord>,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a range read so the commit can validate it.
    pub fn observe(mut self, range: KeyRange, limit: usize, keys: Vec<String>) -> Self {
        self.observed.push(ObservedRange { range, limit, keys });
        self
    }

    /// Queues a record to be written on commit.
    pub fn put(mut self, record: StoredRecord) -> Self {
        self.puts.push(record);
        self
    }
}
