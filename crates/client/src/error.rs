//! Client error types.

use serde::Deserialize;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Name already taken: {0}")]
    Conflict(String),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    kind: String,
    #[serde(default)]
    message: String,
}

impl ClientError {
    /// Builds the error for a non-success response.
    ///
    /// Understands the server's `{"error": {"kind", "message"}}` body and
    /// falls back to the raw text for anything else.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let Ok(ErrorEnvelope { error }) = serde_json::from_str::<ErrorEnvelope>(body) else {
            let message = if body.is_empty() {
                "Unknown error".to_string()
            } else {
                body.to_string()
            };
            return ClientError::ServerError { status, message };
        };

        match error.kind.as_str() {
            "unauthorized" => ClientError::Unauthorized(error.message),
            "bad_request" => ClientError::BadRequest(error.message),
            "conflict" => ClientError::Conflict(error.message),
            _ => ClientError::ServerError {
                status,
                message: error.message,
            },
        }
    }
}
