//! Item API operations.

use ruffnote_core::item::{
    AvailabilityQuery, AvailabilityResponse, CreateItemRequest, DeleteItemQuery,
    DeleteItemResponse, ItemResponse, ItemsResponse, ListItemsQuery, RenameItemRequest,
};

use super::RuffnoteClient;
use crate::error::Result;

impl RuffnoteClient {
    /// List the caller's items. The server clamps `limit` into 1..=100.
    pub async fn list_items(&self, limit: Option<i64>) -> Result<ItemsResponse> {
        let query = ListItemsQuery { limit };
        let response = self
            .authorized(self.client.get(self.url("items")).query(&query))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Check whether `name` is unused by any owner.
    pub async fn check_availability(&self, name: &str) -> Result<AvailabilityResponse> {
        let response = self
            .authorized(
                self.client
                    .get(self.url("item"))
                    .query(&AvailabilityQuery::new(name)),
            )
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Create an item.
    pub async fn create_item(&self, name: &str) -> Result<ItemResponse> {
        let response = self
            .authorized(
                self.client
                    .post(self.url("item"))
                    .json(&CreateItemRequest::new(name)),
            )
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Rename the item with local id `id` to `name`.
    pub async fn rename_item(&self, id: &str, name: &str) -> Result<ItemResponse> {
        let response = self
            .authorized(
                self.client
                    .put(self.url("item"))
                    .json(&RenameItemRequest::new(id, name)),
            )
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete every item of the caller with local id `id`.
    pub async fn delete_item(&self, id: &str) -> Result<()> {
        let response = self
            .authorized(
                self.client
                    .delete(self.url("item"))
                    .query(&DeleteItemQuery::new(id)),
            )
            .send()
            .await?;
        let _: DeleteItemResponse = self.handle_response(response).await?;
        Ok(())
    }
}
