//! Identity provider implementations.
//!
//! This module contains implementations of `IdentityProvider` for:
//! - HS256 signed JWT bearer tokens
//! - Unsigned mock tokens for local development (`mock` feature)

mod jwt;
#[cfg(feature = "mock")]
mod mock;

pub use jwt::JwtIdentityProvider;
#[cfg(feature = "mock")]
pub use mock::MockIdentityProvider;
