use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ruffnote_core::storage::{classify_repository_error, ApiErrorKind, RepositoryError};

/// Error returned by item handlers.
///
/// Wraps any error; the response kind is recovered by downcasting.
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Classifies the wrapped error. Anything unrecognised is a bad request.
    pub fn kind(&self) -> ApiErrorKind {
        match self.0.downcast_ref::<RepositoryError>() {
            Some(repo_error) => classify_repository_error(repo_error),
            // Validation failures and request rejections.
            None => ApiErrorKind::BadRequest,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();

        if kind.is_server_fault() {
            tracing::error!(error = %self.0, kind = ?kind, "Request failed");
        } else {
            tracing::warn!(error = %self.0, kind = ?kind, "Request rejected");
        }

        let status_code =
            StatusCode::from_u16(kind.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::json!({
            "error": {
                "kind": kind,
                "message": self.0.to_string(),
            }
        });

        (status_code, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
