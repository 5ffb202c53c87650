use async_trait::async_trait;

use super::{KeyRange, Result, Transaction};

/// Ordered key-value store the item repository is built on.
///
/// Keys are compared byte-wise. Scans return keys only, in ascending order.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns up to `limit` keys inside `range`, ascending.
    async fn scan_keys(&self, range: &KeyRange, limit: usize) -> Result<Vec<String>>;

    /// Returns up to `limit` keys whose record has the given owner.
    ///
    /// No ordering is guaranteed.
    async fn query_keys_by_owner(&self, owner: &str, limit: usize) -> Result<Vec<String>>;

    /// Applies a transaction atomically, validating its observed ranges first.
    async fn commit(&self, transaction: Transaction) -> Result<()>;

    /// Deletes every key, best effort.
    ///
    /// Missing keys are ignored. When any key fails the whole call reports
    /// failure, even if other keys were already removed.
    async fn delete_multi(&self, keys: &[String]) -> Result<()>;
}
