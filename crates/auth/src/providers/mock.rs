//! Mock identity provider for development and testing.
//!
//! Tokens are base64 encoded JSON claims, e.g. the encoding of
//! `{"sub":"1","email":"dev@example.com","scope":"email"}`. Nothing is signed,
//! so this provider must never face real traffic.

use async_trait::async_trait;
use base64::Engine;
use ruffnote_core::auth::{
    check_requirements, principal_from_claims, AuthError, AuthRequirements, IdentityProvider,
    Principal, Result,
};

use super::jwt::RawClaims;

/// Identity provider that trusts unsigned base64 JSON tokens.
#[derive(Debug, Default, Clone)]
pub struct MockIdentityProvider;

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self
    }

    /// Encodes claims into a token this provider accepts.
    pub fn token_for(claims: &serde_json::Value) -> String {
        base64::engine::general_purpose::STANDARD.encode(claims.to_string())
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn current_user(
        &self,
        token: &str,
        requirements: &AuthRequirements,
    ) -> Result<Principal> {
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(token)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        let raw: RawClaims =
            serde_json::from_slice(&decoded).map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        let claims = raw.into_token_claims();
        check_requirements(&claims, requirements)?;
        principal_from_claims(&claims)
    }
}
