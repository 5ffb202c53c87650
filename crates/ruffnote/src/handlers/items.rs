//! Item handlers.
//!
//! Each handler authenticates the caller through the `CurrentUser`
//! extractor, validates its message, calls the repository and shapes the
//! response. Errors short-circuit through [`AppError`].
//!
//! Rename and delete scan the owner's items and then delete the matching
//! keys. The scan and the delete are separate store calls, so concurrent
//! requests on the same owner's items may interleave.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};

use ruffnote_auth::CurrentUser;
use ruffnote_core::item::{
    select_keys_for_id, select_stale_keys, AvailabilityQuery, AvailabilityResponse,
    CreateItemRequest, DeleteItemQuery, DeleteItemResponse, Item, ItemResponse, ItemsResponse,
    ListItemsQuery, RenameItemRequest,
};

use crate::{handlers::AppError, state::AppState};

/// List the caller's items (GET items).
pub async fn list_items(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    query: Result<Query<ListItemsQuery>, QueryRejection>,
) -> Result<Json<ItemsResponse>, AppError> {
    let Query(query) = query?;
    let limit = query.effective_limit();

    let items = state.items.list_by_owner(&user.user_id, limit).await?;

    tracing::debug!(owner = %user, limit, count = items.len(), "Listed items");
    Ok(Json(ItemsResponse::from_items(&items)))
}

/// Check whether a name is unused by any owner (GET item).
pub async fn check_availability(
    CurrentUser(_user): CurrentUser,
    State(state): State<AppState>,
    query: Result<Query<AvailabilityQuery>, QueryRejection>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let Query(query) = query?;
    query.validate()?;

    let existing = state.items.find_by_name(&query.name).await?;

    Ok(Json(AvailabilityResponse {
        available: existing.is_none(),
        name: query.name,
    }))
}

/// Create an item under a globally unique name (POST item).
pub async fn create_item(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<Json<ItemResponse>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    let item = Item::new(
        user.user_id.clone(),
        state.id_strategy.next_local_id(),
        request.name,
    );
    state.items.create(&item).await?;

    tracing::info!(owner = %user, name = %item.name, id = %item.local_id, "Created item");
    Ok(Json(ItemResponse::from(&item)))
}

/// Rename an item (PUT item).
///
/// Creates the item under the new name, then deletes the caller's items that
/// share its id under any other name. The id is not required to exist.
pub async fn rename_item(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    payload: Result<Json<RenameItemRequest>, JsonRejection>,
) -> Result<Json<ItemResponse>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    let item = Item::new(user.user_id.clone(), request.id, request.name);
    state.items.create(&item).await?;

    let owned = state
        .items
        .list_by_owner(&user.user_id, state.owner_scan_limit)
        .await?;
    let stale = select_stale_keys(&owned, &item.local_id, &item.name);

    if !stale.is_empty() {
        state.items.delete_many(&stale).await?;
    }

    tracing::info!(
        owner = %user,
        name = %item.name,
        id = %item.local_id,
        replaced = stale.len(),
        "Renamed item"
    );
    Ok(Json(ItemResponse::from(&item)))
}

/// Delete every item of the caller with the given id (DELETE item).
pub async fn delete_item(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    query: Result<Query<DeleteItemQuery>, QueryRejection>,
) -> Result<Json<DeleteItemResponse>, AppError> {
    let Query(query) = query?;
    query.validate()?;

    let owned = state
        .items
        .list_by_owner(&user.user_id, state.owner_scan_limit)
        .await?;
    let keys = select_keys_for_id(&owned, &query.id);

    if !keys.is_empty() {
        state.items.delete_many(&keys).await?;
    }

    tracing::info!(owner = %user, id = %query.id, deleted = keys.len(), "Deleted items");
    Ok(Json(DeleteItemResponse {}))
}
