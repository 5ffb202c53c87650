use thiserror::Error;

/// Errors raised while validating item requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("require name")]
    EmptyName,
    #[error("require id")]
    EmptyId,
    #[error("unknown item id strategy: {0}")]
    UnknownIdStrategy(String),
}
