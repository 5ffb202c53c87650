mod error;
mod functions;
mod traits;
mod types;
mod validation;

pub use error::AuthError;
pub use functions::{parse_bearer_token, principal_from_claims, split_scopes};
pub use traits::{IdentityProvider, Result};
pub use types::{AuthRequirements, Principal, TokenClaims};
pub use validation::check_requirements;
