use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,

    #[error("malformed authorization header")]
    MalformedHeader,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("missing required claim: {0}")]
    MissingClaim(String),

    #[error("token does not grant a required scope")]
    ScopeNotGranted,

    #[error("audience not allowed: {0}")]
    AudienceNotAllowed(String),

    #[error("client id not allowed: {0}")]
    ClientNotAllowed(String),

    #[error("provider error: {0}")]
    Provider(String),
}

impl AuthError {
    /// True for failures of the provider itself rather than of the caller's credentials.
    pub fn is_provider_failure(&self) -> bool {
        matches!(self, AuthError::Provider(_))
    }
}
