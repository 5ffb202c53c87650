use axum::{extract::State, Json};
use ruffnote_core::service::ServiceDescriptor;

use crate::state::AppState;

/// GET discovery - service registration metadata. No auth required.
pub async fn discovery(State(state): State<AppState>) -> Json<ServiceDescriptor> {
    Json(state.service.as_ref().clone())
}
