mod error;
mod key;
mod operations;
mod requests;
mod types;

pub use error::ItemError;
pub use key::{decode_key, encode_key, name_range, ItemKey, KEY_SEPARATOR, RANGE_END};
pub use operations::{select_keys_for_id, select_stale_keys};
pub use requests::{
    clamp_list_limit, AvailabilityQuery, AvailabilityResponse, CreateItemRequest,
    DeleteItemQuery, DeleteItemResponse, ItemResponse, ItemsResponse, ListItemsQuery,
    RenameItemRequest, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT, MIN_LIST_LIMIT,
};
pub use types::{Item, LocalIdStrategy, PLACEHOLDER_LOCAL_ID};
