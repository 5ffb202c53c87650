//! Composite storage keys for items.
//!
//! The store knows an item only by its key, `"<name>/<local_id>"`. Both fields
//! are recovered by splitting on the first `/`. Because the store keeps keys in
//! lexicographic order, every item carrying a given name sits inside the
//! half-open range `"<name>/".."<name>0"`, which is what name uniqueness is
//! enforced against. `'0'` is the byte right after `'/'`, so the bound holds
//! for any local id, including ids starting with multi-byte characters.
//!
//! Names containing `/` decode ambiguously: `encode_key("a/b", "id")` yields
//! `"a/b/id"`, which decodes as `("a", "b/id")`. Such names are outside the
//! key contract and are neither rejected nor repaired here.

use serde::{Deserialize, Serialize};

use crate::storage::KeyRange;

/// Separator between the name and local id inside a storage key.
pub const KEY_SEPARATOR: char = '/';

/// Exclusive upper bound character for name range scans, the successor of
/// [`KEY_SEPARATOR`].
pub const RANGE_END: char = '0';

/// Builds the storage key for a name/local id pair.
///
/// # Examples
///
/// ```
/// use ruffnote_core::item::encode_key;
///
/// assert_eq!(encode_key("alpha", "id"), "alpha/id");
/// ```
pub fn encode_key(name: &str, local_id: &str) -> String {
    format!("{name}{KEY_SEPARATOR}{local_id}")
}

/// Splits a storage key into `(name, local_id)` on the first separator.
///
/// Keys without a separator decode to two empty strings.
///
/// # Examples
///
/// ```
/// use ruffnote_core::item::decode_key;
///
/// assert_eq!(decode_key("alpha/id"), ("alpha".to_string(), "id".to_string()));
/// assert_eq!(decode_key("orphan"), (String::new(), String::new()));
/// ```
pub fn decode_key(key: &str) -> (String, String) {
    match key.split_once(KEY_SEPARATOR) {
        Some((name, local_id)) => (name.to_string(), local_id.to_string()),
        None => (String::new(), String::new()),
    }
}

/// Half-open key range holding every item stored under `name`.
pub fn name_range(name: &str) -> KeyRange {
    KeyRange::new(format!("{name}{KEY_SEPARATOR}"), format!("{name}{RANGE_END}"))
}

/// A decoded storage key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKey {
    pub name: String,
    pub local_id: String,
}

impl ItemKey {
    pub fn new(name: impl Into<String>, local_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            local_id: local_id.into(),
        }
    }

    /// Decodes a raw storage key read back from the store.
    pub fn decode(key: &str) -> Self {
        let (name, local_id) = decode_key(key);
        Self { name, local_id }
    }

    /// The raw storage key.
    pub fn encode(&self) -> String {
        encode_key(&self.name, &self.local_id)
    }
}
