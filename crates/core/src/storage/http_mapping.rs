//! Pure functions for mapping repository errors to the API error surface.
//!
//! This module provides the classification of [`RepositoryError`] variants
//! into [`ApiErrorKind`], following the Functional Core pattern - pure
//! functions with no side effects.

use serde::{Deserialize, Serialize};

use super::RepositoryError;

/// Error kinds visible to API callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    Unauthorized,
    BadRequest,
    Conflict,
    InternalServerError,
}

impl ApiErrorKind {
    /// HTTP status code for this kind.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiErrorKind::Unauthorized => 401,
            ApiErrorKind::BadRequest => 400,
            ApiErrorKind::Conflict => 409,
            ApiErrorKind::InternalServerError => 500,
        }
    }

    /// Whether the server should log this kind at error level.
    pub fn is_server_fault(&self) -> bool {
        matches!(self, ApiErrorKind::InternalServerError)
    }
}

/// Classifies a [`RepositoryError`] into the API error surface.
///
/// - `AlreadyExists` -> `Conflict`
/// - `ConcurrentModification`, `CapabilityDisabled`, `OverQuota`, `Timeout`,
///   `ConnectionFailed`, `QueryFailed` -> `InternalServerError`
/// - anything else (`NotFound`, `InvalidData`) -> `BadRequest`
///
/// # Examples
///
/// ```
/// use ruffnote_core::storage::{classify_repository_error, ApiErrorKind, RepositoryError};
///
/// let error = RepositoryError::AlreadyExists {
///     entity_type: "Item",
///     id: "alpha".to_string(),
/// };
/// assert_eq!(classify_repository_error(&error), ApiErrorKind::Conflict);
/// ```
pub fn classify_repository_error(error: &RepositoryError) -> ApiErrorKind {
    match error {
        RepositoryError::AlreadyExists { .. } => ApiErrorKind::Conflict,
        RepositoryError::ConcurrentModification(_)
        | RepositoryError::CapabilityDisabled(_)
        | RepositoryError::OverQuota(_)
        | RepositoryError::Timeout(_)
        | RepositoryError::ConnectionFailed(_)
        | RepositoryError::QueryFailed(_) => ApiErrorKind::InternalServerError,
        RepositoryError::NotFound { .. } | RepositoryError::InvalidData(_) => {
            ApiErrorKind::BadRequest
        }
    }
}

/// Maps a [`RepositoryError`] to an HTTP status code.
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    classify_repository_error(error).status_code()
}
