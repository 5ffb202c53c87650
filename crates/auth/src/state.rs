//! Application state for auth.

use std::sync::Arc;

use axum::extract::FromRef;
use ruffnote_core::auth::{AuthRequirements, IdentityProvider};

use crate::config::AuthConfig;
use crate::error::AuthError;

#[cfg(not(feature = "mock"))]
use crate::providers::JwtIdentityProvider;

#[cfg(feature = "mock")]
use crate::providers::MockIdentityProvider;

/// Shared state for authenticated handlers.
#[derive(Clone)]
pub struct AuthState {
    pub provider: Arc<dyn IdentityProvider>,
    pub requirements: AuthRequirements,
}

impl AuthState {
    /// Creates an AuthState with an explicit provider.
    pub fn with_provider(
        provider: Arc<dyn IdentityProvider>,
        requirements: AuthRequirements,
    ) -> Self {
        Self {
            provider,
            requirements,
        }
    }

    /// Creates an AuthState verifying HS256 JWTs.
    ///
    /// # Errors
    ///
    /// Returns an error if no JWT secret is configured.
    #[cfg(not(feature = "mock"))]
    pub fn from_config(config: &AuthConfig) -> Result<Self, AuthError> {
        let secret = config
            .jwt_secret
            .as_deref()
            .ok_or_else(|| AuthError::Config("AUTH_JWT_SECRET must be set".to_string()))?;

        let provider = JwtIdentityProvider::new(
            secret.as_bytes(),
            config.issuer.as_deref(),
            config.leeway_secs,
        );

        Ok(Self::with_provider(
            Arc::new(provider),
            config.requirements.clone(),
        ))
    }

    /// Creates an AuthState with the mock provider for development.
    #[cfg(feature = "mock")]
    pub fn from_config(config: &AuthConfig) -> Result<Self, AuthError> {
        tracing::warn!("Using the mock identity provider: tokens are not verified");
        Ok(Self::with_provider(
            Arc::new(MockIdentityProvider::new()),
            config.requirements.clone(),
        ))
    }
}

/// Allows AuthState to be extracted from a parent state.
impl<S> FromRef<S> for AuthState
where
    S: AsRef<AuthState>,
{
    fn from_ref(state: &S) -> Self {
        state.as_ref().clone()
    }
}
