//! Item persistence over a `KeyValueStore`.
//!
//! Name uniqueness is enforced without a secondary index: every key starts
//! with `"<name>/"`, so a one-key range scan over that prefix answers whether
//! a name is taken. `create` records that scan in an optimistic transaction
//! and the store rejects the commit if the range changed in between.
//!
//! Rename and delete are scan-then-delete sequences issued by the handlers.
//! They are not transactional across the scan and the delete, so concurrent
//! renames or deletes of the same owner's items can interleave.

use std::sync::Arc;

use ruffnote_core::item::{name_range, Item, ItemKey};
use ruffnote_core::storage::{KeyValueStore, RepositoryError, Result, StoredRecord, Transaction};

/// Default number of commit attempts made by [`ItemRepository::create`].
pub const DEFAULT_CREATE_MAX_ATTEMPTS: u32 = 3;

/// Item repository backed by any ordered key-value store.
#[derive(Clone)]
pub struct ItemRepository {
    store: Arc<dyn KeyValueStore>,
    create_max_attempts: u32,
}

impl ItemRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            create_max_attempts: DEFAULT_CREATE_MAX_ATTEMPTS,
        }
    }

    /// Sets how many times `create` commits before giving up. At least one.
    pub fn with_create_max_attempts(mut self, attempts: u32) -> Self {
        self.create_max_attempts = attempts.max(1);
        self
    }

    /// Returns the key of any item named `name`, regardless of owner.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<ItemKey>> {
        let keys = self.store.scan_keys(&name_range(name), 1).await?;
        Ok(keys.first().map(|key| ItemKey::decode(key)))
    }

    /// Returns up to `limit` items owned by `owner`, in store order.
    pub async fn list_by_owner(&self, owner: &str, limit: usize) -> Result<Vec<Item>> {
        let keys = self.store.query_keys_by_owner(owner, limit).await?;
        Ok(keys
            .iter()
            .map(|key| Item::from_storage_key(owner, key))
            .collect())
    }

    /// Persists `item` if no item of any owner already has its name.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` when the name is taken
    /// - `ConcurrentModification` when every commit attempt lost a race
    /// - any store failure, unchanged
    pub async fn create(&self, item: &Item) -> Result<()> {
        let range = name_range(&item.name);
        let mut attempt = 1;

        loop {
            let existing = self.store.scan_keys(&range, 1).await?;
            if !existing.is_empty() {
                return Err(RepositoryError::AlreadyExists {
                    entity_type: "Item",
                    id: item.name.clone(),
                });
            }

            let transaction = Transaction::new()
                .observe(range.clone(), 1, existing)
                .put(StoredRecord::new(item.storage_key(), item.owner.clone()));

            match self.store.commit(transaction).await {
                Ok(()) => return Ok(()),
                Err(e) if e.is_retryable() && attempt < self.create_max_attempts => {
                    tracing::debug!(
                        name = %item.name,
                        attempt,
                        "Create lost a commit race, retrying"
                    );
                    attempt += 1;
                }
                Err(e) => {
                    if e.is_retryable() {
                        tracing::warn!(
                            name = %item.name,
                            attempts = attempt,
                            error = %e,
                            "Create gave up after repeated commit races"
                        );
                    }
                    return Err(e);
                }
            }
        }
    }

    /// Deletes every key, best effort. A partial failure fails the whole call.
    pub async fn delete_many(&self, keys: &[String]) -> Result<()> {
        self.store.delete_multi(keys).await
    }
}
