use async_trait::async_trait;

use super::{AuthError, AuthRequirements, Principal};

/// Result type for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Resolves the caller of a request from its bearer token.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verifies `token` and checks it against `requirements`.
    async fn current_user(&self, token: &str, requirements: &AuthRequirements)
        -> Result<Principal>;
}
