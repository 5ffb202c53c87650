//! In-memory key-value store implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use ruffnote_core::storage::{KeyRange, KeyValueStore, RepositoryError, Result, Transaction};

/// In-memory store keyed by storage key, holding each record's owner.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: Arc<RwLock<BTreeMap<String, String>>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn scan(records: &BTreeMap<String, String>, range: &KeyRange, limit: usize) -> Vec<String> {
    if range.start >= range.end {
        return Vec::new();
    }
    records
        .range(range.start.clone()..range.end.clone())
        .take(limit)
        .map(|(key, _)| key.clone())
        .collect()
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn scan_keys(&self, range: &KeyRange, limit: usize) -> Result<Vec<String>> {
        let records = self.records.read().await;
        Ok(scan(&records, range, limit))
    }

    async fn query_keys_by_owner(&self, owner: &str, limit: usize) -> Result<Vec<String>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|(_, record_owner)| record_owner.as_str() == owner)
            .take(limit)
            .map(|(key, _)| key.clone())
            .collect())
    }

    async fn commit(&self, transaction: Transaction) -> Result<()> {
        let mut records = self.records.write().await;

        for observed in &transaction.observed {
            if scan(&records, &observed.range, observed.limit) != observed.keys {
                return Err(RepositoryError::ConcurrentModification(format!(
                    "range {}..{} changed before commit",
                    observed.range.start, observed.range.end
                )));
            }
        }

        for record in transaction.puts {
            records.insert(record.key, record.owner);
        }
        Ok(())
    }

    async fn delete_multi(&self, keys: &[String]) -> Result<()> {
        let mut records = self.records.write().await;
        for key in keys {
            records.remove(key);
        }
        Ok(())
    }
}
