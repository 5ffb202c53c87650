use serde::{Deserialize, Serialize};

/// The authenticated caller of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Opaque identifier items are owned by.
    pub user_id: String,
    pub email: Option<String>,
    /// OAuth client the token was issued to.
    pub client_id: Option<String>,
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.user_id)
    }
}

/// Provider-agnostic claims extracted from a verified token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Provider's unique user identifier.
    pub subject: String,
    pub email: Option<String>,
    pub audiences: Vec<String>,
    /// Authorized party (`azp`) the token was issued to.
    pub client_id: Option<String>,
    pub scopes: Vec<String>,
}

/// What a method demands from the caller's token.
///
/// Empty lists accept anything for that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRequirements {
    pub scopes: Vec<String>,
    pub audiences: Vec<String>,
    pub client_ids: Vec<String>,
}

impl AuthRequirements {
    pub fn new(scopes: Vec<String>, audiences: Vec<String>, client_ids: Vec<String>) -> Self {
        Self {
            scopes,
            audiences,
            client_ids,
        }
    }
}
