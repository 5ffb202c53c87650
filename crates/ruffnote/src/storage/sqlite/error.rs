//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError`
//! from `ruffnote_core::storage`.

use ruffnote_core::storage::RepositoryError;

/// Maps a rusqlite error to a RepositoryError.
///
/// # Error Mapping
///
/// - `SQLITE_BUSY` / `SQLITE_LOCKED` → `RepositoryError::Timeout`
/// - `SQLITE_FULL` → `RepositoryError::OverQuota`
/// - `SQLITE_READONLY` / `SQLITE_PERM` → `RepositoryError::CapabilityDisabled`
/// - `SQLITE_CANTOPEN` → `RepositoryError::ConnectionFailed`
/// - PRIMARY KEY / UNIQUE constraint → `RepositoryError::AlreadyExists`
/// - All other errors → `RepositoryError::QueryFailed`
fn map_rusqlite_error(err: &rusqlite::Error) -> RepositoryError {
    let rusqlite::Error::SqliteFailure(sqlite_err, _) = err else {
        return RepositoryError::QueryFailed(err.to_string());
    };

    match sqlite_err.code {
        rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked => {
            RepositoryError::Timeout(err.to_string())
        }
        rusqlite::ErrorCode::DiskFull => RepositoryError::OverQuota(err.to_string()),
        rusqlite::ErrorCode::ReadOnly | rusqlite::ErrorCode::PermissionDenied => {
            RepositoryError::CapabilityDisabled(err.to_string())
        }
        rusqlite::ErrorCode::CannotOpen => {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }
        rusqlite::ErrorCode::ConstraintViolation
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                || sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            RepositoryError::AlreadyExists {
                entity_type: "Item",
                id: "unknown".to_string(),
            }
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError.
///
/// This is the main entry point for error mapping in async code.
pub fn map_tokio_rusqlite_error(err: tokio_rusqlite::Error) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => map_rusqlite_error(rusqlite_err),
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::ffi;

    fn failure(code: rusqlite::ErrorCode, extended_code: i32) -> tokio_rusqlite::Error {
        tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(
            ffi::Error {
                code,
                extended_code,
            },
            None,
        ))
    }

    #[test]
    fn test_busy_maps_to_timeout() {
        let result = map_tokio_rusqlite_error(failure(
            rusqlite::ErrorCode::DatabaseBusy,
            ffi::SQLITE_BUSY,
        ));
        assert!(matches!(result, RepositoryError::Timeout(_)));
    }

    #[test]
    fn test_full_maps_to_over_quota() {
        let result =
            map_tokio_rusqlite_error(failure(rusqlite::ErrorCode::DiskFull, ffi::SQLITE_FULL));
        assert!(matches!(result, RepositoryError::OverQuota(_)));
    }

    #[test]
    fn test_readonly_maps_to_capability_disabled() {
        let result = map_tokio_rusqlite_error(failure(
            rusqlite::ErrorCode::ReadOnly,
            ffi::SQLITE_READONLY,
        ));
        assert!(matches!(result, RepositoryError::CapabilityDisabled(_)));
    }

    #[test]
    fn test_primary_key_maps_to_already_exists() {
        let result = map_tokio_rusqlite_error(failure(
            rusqlite::ErrorCode::ConstraintViolation,
            ffi::SQLITE_CONSTRAINT_PRIMARYKEY,
        ));
        assert!(matches!(
            result,
            RepositoryError::AlreadyExists {
                entity_type: "Item",
                ..
            }
        ));
    }

    #[test]
    fn test_connection_closed_maps_to_connection_failed() {
        let result = map_tokio_rusqlite_error(tokio_rusqlite::Error::ConnectionClosed);
        assert!(matches!(result, RepositoryError::ConnectionFailed(_)));
    }

    #[test]
    fn test_other_errors_map_to_query_failed() {
        let result = map_tokio_rusqlite_error(tokio_rusqlite::Error::Rusqlite(
            rusqlite::Error::InvalidQuery,
        ));
        assert!(matches!(result, RepositoryError::QueryFailed(_)));
    }
}
