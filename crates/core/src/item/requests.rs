//! Request and response messages for the item API.
//!
//! These types are shared between the server and client for type-safe API communication.
//! Following the Functional Core pattern, these are pure data types with no I/O.

use serde::{Deserialize, Serialize};

use super::error::ItemError;
use super::types::Item;

/// Number of items returned by `item.list` when no limit is given.
pub const DEFAULT_LIST_LIMIT: usize = 10;
/// Smallest accepted list limit.
pub const MIN_LIST_LIMIT: usize = 1;
/// Largest accepted list limit.
pub const MAX_LIST_LIMIT: usize = 100;

/// Clamps a caller supplied list limit into `1..=100`, defaulting to 10.
pub fn clamp_list_limit(limit: Option<i64>) -> usize {
    match limit {
        None => DEFAULT_LIST_LIMIT,
        Some(n) if n < MIN_LIST_LIMIT as i64 => MIN_LIST_LIMIT,
        Some(n) if n > MAX_LIST_LIMIT as i64 => MAX_LIST_LIMIT,
        Some(n) => n as usize,
    }
}

/// Query parameters for `GET items`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListItemsQuery {
    #[serde(
        default,
        deserialize_with = "crate::serde::deserialize_optional_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub limit: Option<i64>,
}

impl ListItemsQuery {
    /// The limit actually applied to the owner query.
    pub fn effective_limit(&self) -> usize {
        clamp_list_limit(self.limit)
    }
}

/// Query parameters for `GET item`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    #[serde(default)]
    pub name: String,
}

impl AvailabilityQuery {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> Result<(), ItemError> {
        require_name(&self.name)
    }
}

/// Body of `POST item`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateItemRequest {
    #[serde(default)]
    pub name: String,
}

impl CreateItemRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> Result<(), ItemError> {
        require_name(&self.name)
    }
}

/// Body of `PUT item`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenameItemRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl RenameItemRequest {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ItemError> {
        require_id(&self.id)?;
        require_name(&self.name)
    }
}

/// Query parameters for `DELETE item`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteItemQuery {
    #[serde(default)]
    pub id: String,
}

impl DeleteItemQuery {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn validate(&self) -> Result<(), ItemError> {
        require_id(&self.id)
    }
}

fn require_name(name: &str) -> Result<(), ItemError> {
    if name.is_empty() {
        return Err(ItemError::EmptyName);
    }
    Ok(())
}

fn require_id(id: &str) -> Result<(), ItemError> {
    if id.is_empty() {
        return Err(ItemError::EmptyId);
    }
    Ok(())
}

/// A single item as seen by API callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemResponse {
    pub id: String,
    pub name: String,
}

impl From<&Item> for ItemResponse {
    fn from(item: &Item) -> Self {
        Self {
            id: item.local_id.clone(),
            name: item.name.clone(),
        }
    }
}

/// Response of `GET items`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemsResponse {
    pub items: Vec<ItemResponse>,
}

impl ItemsResponse {
    pub fn from_items(items: &[Item]) -> Self {
        Self {
            items: items.iter().map(ItemResponse::from).collect(),
        }
    }
}

/// Response of `GET item`. `available` is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub name: String,
    pub available: bool,
}

/// Response of `DELETE item`; serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteItemResponse {}
