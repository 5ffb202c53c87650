use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ItemError;
use super::key::{encode_key, ItemKey};

/// Local id given to every created item under [`LocalIdStrategy::Placeholder`].
pub const PLACEHOLDER_LOCAL_ID: &str = "id";

/// A named resource owned by one user.
///
/// `name` and `local_id` are always decoded eagerly from the storage key when
/// an item is loaded, see [`Item::from_storage_key`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub owner: String,
    pub name: String,
    pub local_id: String,
}

impl Item {
    pub fn new(
        owner: impl Into<String>,
        local_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            local_id: local_id.into(),
        }
    }

    /// Rebuilds an item from a stored key and its owner field.
    pub fn from_storage_key(owner: impl Into<String>, storage_key: &str) -> Self {
        let ItemKey { name, local_id } = ItemKey::decode(storage_key);
        Self {
            owner: owner.into(),
            name,
            local_id,
        }
    }

    /// The composite key this item is stored under.
    pub fn storage_key(&self) -> String {
        encode_key(&self.name, &self.local_id)
    }
}

/// How the create operation picks a local id for a new item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalIdStrategy {
    /// Every created item gets the literal local id `"id"`, so rename and
    /// delete address all of an owner's created items at once.
    #[default]
    Placeholder,
    /// Every created item gets a fresh v4 UUID.
    Uuid,
}

impl LocalIdStrategy {
    pub fn next_local_id(&self) -> String {
        match self {
            LocalIdStrategy::Placeholder => PLACEHOLDER_LOCAL_ID.to_string(),
            LocalIdStrategy::Uuid => Uuid::new_v4().to_string(),
        }
    }
}

impl FromStr for LocalIdStrategy {
    type Err = ItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "placeholder" => Ok(LocalIdStrategy::Placeholder),
            "uuid" => Ok(LocalIdStrategy::Uuid),
            other => Err(ItemError::UnknownIdStrategy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_is_composite() {
        let item = Item::new("u1@example.com", "id", "alpha");
        assert_eq!(item.storage_key(), "alpha/id");
    }

    #[test]
    fn test_from_storage_key_decodes_eagerly() {
        let item = Item::from_storage_key("u1", "alpha/42");
        assert_eq!(item.owner, "u1");
        assert_eq!(item.name, "alpha");
        assert_eq!(item.local_id, "42");
    }

    #[test]
    fn test_from_malformed_key_leaves_fields_empty() {
        let item = Item::from_storage_key("u1", "broken");
        assert_eq!(item.name, "");
        assert_eq!(item.local_id, "");
    }

    #[test]
    fn test_placeholder_strategy_always_returns_literal() {
        let strategy = LocalIdStrategy::Placeholder;
        assert_eq!(strategy.next_local_id(), "id");
        assert_eq!(strategy.next_local_id(), "id");
    }

    #[test]
    fn test_uuid_strategy_generates_distinct_ids() {
        let strategy = LocalIdStrategy::Uuid;
        let first = strategy.next_local_id();
        let second = strategy.next_local_id();
        assert_ne!(first, second);
        assert!(Uuid::parse_str(&first).is_ok());
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!(
            "placeholder".parse::<LocalIdStrategy>().unwrap(),
            LocalIdStrategy::Placeholder
        );
        assert_eq!(
            " UUID ".parse::<LocalIdStrategy>().unwrap(),
            LocalIdStrategy::Uuid
        );
        assert_eq!(
            "random".parse::<LocalIdStrategy>(),
            Err(ItemError::UnknownIdStrategy("random".to_string()))
        );
    }
}
