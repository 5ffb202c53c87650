use thiserror::Error;

/// Errors that can occur during store and repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    /// An optimistic transaction observed data that changed before commit.
    #[error("Concurrent modification: {0}")]
    ConcurrentModification(String),
    #[error("Capability disabled: {0}")]
    CapabilityDisabled(String),
    #[error("Over quota: {0}")]
    OverQuota(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// True when retrying the same operation may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, RepositoryError::ConcurrentModification(_))
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
