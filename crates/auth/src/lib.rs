//! Bearer token authentication for ruffnote.
//!
//! This crate provides:
//! - Identity providers (HS256 JWT, and a mock provider behind the `mock` feature)
//! - Auth configuration loaded from the environment
//! - Axum extractor resolving the authenticated principal

mod config;
mod error;
mod extractors;
mod providers;
mod state;

pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::CurrentUser;
#[cfg(feature = "mock")]
pub use providers::MockIdentityProvider;
pub use providers::JwtIdentityProvider;
pub use state::AuthState;
