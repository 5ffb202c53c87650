//! HS256 JWT identity provider.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use ruffnote_core::auth::{
    check_requirements, principal_from_claims, split_scopes, AuthError, AuthRequirements,
    IdentityProvider, Principal, Result, TokenClaims,
};
use serde::Deserialize;

/// `aud` may be a single string or a list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Audience {
    One(String),
    Many(Vec<String>),
}

/// Claims as they appear in the token payload.
#[derive(Debug, Deserialize)]
pub(crate) struct RawClaims {
    #[serde(default)]
    sub: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    aud: Option<Audience>,
    #[serde(default)]
    azp: Option<String>,
    #[serde(default)]
    scope: Option<String>,
}

impl RawClaims {
    pub(crate) fn into_token_claims(self) -> TokenClaims {
        let audiences = match self.aud {
            Some(Audience::One(aud)) => vec![aud],
            Some(Audience::Many(auds)) => auds,
            None => Vec::new(),
        };

        TokenClaims {
            subject: self.sub,
            email: self.email,
            audiences,
            client_id: self.azp,
            scopes: self.scope.as_deref().map(split_scopes).unwrap_or_default(),
        }
    }
}

/// Verifies HS256 bearer tokens signed with a shared secret.
///
/// `exp` is required. Audience, client id and scope checks are done against
/// the per-method [`AuthRequirements`] rather than by the JWT library.
pub struct JwtIdentityProvider {
    key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityProvider {
    pub fn new(secret: &[u8], issuer: Option<&str>, leeway_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_aud = false;
        validation.leeway = leeway_secs;
        if let Some(issuer) = issuer {
            validation.set_issuer(&[issuer]);
        }

        Self {
            key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Verifies the signature and standard claims of `token`.
    pub fn verify(&self, token: &str) -> Result<TokenClaims> {
        let data = decode::<RawClaims>(token, &self.key, &self.validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;
        Ok(data.claims.into_token_claims())
    }
}

#[async_trait]
impl IdentityProvider for JwtIdentityProvider {
    async fn current_user(
        &self,
        token: &str,
        requirements: &AuthRequirements,
    ) -> Result<Principal> {
        let claims = self.verify(token)?;
        check_requirements(&claims, requirements)?;
        principal_from_claims(&claims)
    }
}
