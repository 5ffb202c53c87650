//! Axum extractors for authentication.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use ruffnote_core::auth::{parse_bearer_token, AuthError as CoreError, Principal};

use crate::{AuthError, AuthState};

/// Extractor for the authenticated caller. Rejects with 401 if not authenticated.
pub struct CurrentUser(pub Principal);

impl<S> FromRequestParts<S> for CurrentUser
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);

        let header_value = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(CoreError::MissingToken)?
            .to_str()
            .map_err(|_| CoreError::MalformedHeader)?;

        let token = parse_bearer_token(header_value)?;

        let principal = auth_state
            .provider
            .current_user(token, &auth_state.requirements)
            .await?;

        Ok(CurrentUser(principal))
    }
}
