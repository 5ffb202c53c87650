//! Pure selection logic for the two-phase rename and delete protocols.
//!
//! Both operations first scan an owner's items, then pick the storage keys to
//! remove with the functions below, then delete those keys. The scan and the
//! delete are separate store calls: a concurrent rename or delete on the same
//! owner can interleave between them.

use super::types::Item;

/// Storage keys of every item carrying `local_id`.
pub fn select_keys_for_id(items: &[Item], local_id: &str) -> Vec<String> {
    items
        .iter()
        .filter(|item| item.local_id == local_id)
        .map(Item::storage_key)
        .collect()
}

/// Storage keys left behind by a rename of `local_id` to `new_name`.
///
/// Items already carrying `new_name` are kept, so the freshly created item
/// survives.
pub fn select_stale_keys(items: &[Item], local_id: &str, new_name: &str) -> Vec<String> {
    items
        .iter()
        .filter(|item| item.local_id == local_id)
        .filter(|item| item.name != new_name)
        .map(Item::storage_key)
        .collect()
}
