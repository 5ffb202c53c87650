use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ruffnote_core::storage::ApiErrorKind;
use thiserror::Error;

/// Auth errors for the ruffnote_auth crate.
///
/// This wraps the core `AuthError` and adds crate-specific error variants.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Error from the core auth module (token parsing, requirement checks, etc.)
    #[error(transparent)]
    Core(#[from] ruffnote_core::auth::AuthError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl AuthError {
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            AuthError::Core(core) if core.is_provider_failure() => {
                ApiErrorKind::InternalServerError
            }
            AuthError::Core(_) => ApiErrorKind::Unauthorized,
            AuthError::Config(_) => ApiErrorKind::InternalServerError,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let kind = self.kind();

        let message = if kind.is_server_fault() {
            tracing::error!(error = %self, "Auth error");
            "Internal server error".to_string()
        } else {
            tracing::info!(error = %self, "Rejected credentials");
            self.to_string()
        };

        let status =
            StatusCode::from_u16(kind.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (
            status,
            Json(serde_json::json!({ "error": { "kind": kind, "message": message } })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruffnote_core::auth::AuthError as CoreError;

    #[test]
    fn test_credential_failures_are_unauthorized() {
        for core in [
            CoreError::MissingToken,
            CoreError::MalformedHeader,
            CoreError::InvalidToken("bad".to_string()),
            CoreError::ScopeNotGranted,
            CoreError::ClientNotAllowed("cli".to_string()),
        ] {
            assert_eq!(AuthError::from(core).kind(), ApiErrorKind::Unauthorized);
        }
    }

    #[test]
    fn test_provider_and_config_failures_are_internal() {
        assert_eq!(
            AuthError::from(CoreError::Provider("down".to_string())).kind(),
            ApiErrorKind::InternalServerError
        );
        assert_eq!(
            AuthError::Config("missing".to_string()).kind(),
            ApiErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = AuthError::from(CoreError::MissingToken).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
