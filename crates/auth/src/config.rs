use ruffnote_core::auth::AuthRequirements;

use crate::error::AuthError;

/// Scope requested by clients that sign in with their email identity.
pub const EMAIL_SCOPE: &str = "https://www.googleapis.com/auth/userinfo.email";

/// Default clock skew tolerance for `exp`, in seconds.
pub const DEFAULT_LEEWAY_SECS: u64 = 60;

/// Complete auth configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Shared HS256 secret. Required unless the `mock` feature is enabled.
    pub jwt_secret: Option<String>,
    pub issuer: Option<String>,
    pub leeway_secs: u64,
    pub requirements: AuthRequirements,
}

impl AuthConfig {
    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `AUTH_JWT_SECRET`: HS256 secret tokens are signed with
    /// - `AUTH_ISSUER`: expected `iss` claim (optional)
    /// - `AUTH_LEEWAY_SECONDS`: clock skew tolerance for `exp` (default: 60)
    /// - `AUTH_SCOPES`: comma separated accepted scopes (default: the userinfo email scope)
    /// - `AUTH_AUDIENCES`: comma separated accepted audiences (default: any)
    /// - `AUTH_CLIENT_IDS`: comma separated accepted client ids (default: any)
    ///
    /// # Errors
    ///
    /// Returns an error if `AUTH_JWT_SECRET` is missing in a build without the
    /// `mock` feature, or if `AUTH_LEEWAY_SECONDS` is not a non-negative
    /// integer.
    pub fn from_env() -> Result<Self, AuthError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AuthError> {
        let jwt_secret = lookup("AUTH_JWT_SECRET").filter(|s| !s.is_empty());

        if jwt_secret.is_none() && !cfg!(feature = "mock") {
            return Err(AuthError::Config(
                "AUTH_JWT_SECRET must be set".to_string(),
            ));
        }

        let leeway_secs = match lookup("AUTH_LEEWAY_SECONDS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                AuthError::Config(format!(
                    "AUTH_LEEWAY_SECONDS must be a non-negative integer, got '{raw}'"
                ))
            })?,
            None => DEFAULT_LEEWAY_SECS,
        };

        let scopes = match lookup("AUTH_SCOPES") {
            Some(value) => split_list(&value),
            None => vec![EMAIL_SCOPE.to_string()],
        };

        Ok(Self {
            jwt_secret,
            issuer: lookup("AUTH_ISSUER").filter(|s| !s.is_empty()),
            leeway_secs,
            requirements: AuthRequirements::new(
                scopes,
                lookup("AUTH_AUDIENCES")
                    .map(|v| split_list(&v))
                    .unwrap_or_default(),
                lookup("AUTH_CLIENT_IDS")
                    .map(|v| split_list(&v))
                    .unwrap_or_default(),
            ),
        })
    }
}

/// Splits a comma separated list, dropping blanks.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
