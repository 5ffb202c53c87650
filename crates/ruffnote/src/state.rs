//! Application state shared by every request handler.
//!
//! The store backend is chosen by feature flag; each backend gets its own
//! `AppState::new` factory below.

use std::sync::Arc;

use ruffnote_auth::AuthState;
use ruffnote_core::item::LocalIdStrategy;
use ruffnote_core::service::{item_service, ServiceDescriptor};
use ruffnote_core::storage::KeyValueStore;

use crate::config::Config;
use crate::repository::ItemRepository;

/// Shared application state.
///
/// Cloned for each request; everything inside is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub items: ItemRepository,
    /// Registration metadata published at `/discovery`.
    pub service: Arc<ServiceDescriptor>,
    pub auth: AuthState,
    pub id_strategy: LocalIdStrategy,
    pub owner_scan_limit: usize,
}

impl AppState {
    /// Wires a store and identity provider into the state handlers use.
    pub fn build(store: Arc<dyn KeyValueStore>, auth: AuthState, config: &Config) -> Self {
        let service = item_service(
            config.service_name.clone(),
            config.service_version.clone(),
            &auth.requirements,
        );

        Self {
            items: ItemRepository::new(store)
                .with_create_max_attempts(config.create_max_attempts),
            service: Arc::new(service),
            auth,
            id_strategy: config.id_strategy,
            owner_scan_limit: config.owner_scan_limit,
        }
    }
}

impl AsRef<AuthState> for AppState {
    fn as_ref(&self) -> &AuthState {
        &self.auth
    }
}

// ============================================================================
// Factory functions for each storage backend
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryStore;

    impl AppState {
        /// Creates AppState with in-memory storage.
        pub async fn new(config: &Config, auth: AuthState) -> Result<Self, anyhow::Error> {
            tracing::info!("Using in-memory storage; items are lost on restart");
            Ok(Self::build(Arc::new(InMemoryStore::new()), auth, config))
        }
    }
}

#[cfg(feature = "sqlite")]
mod sqlite_backend {
    use super::*;
    use crate::storage::SqliteStore;

    impl AppState {
        /// Creates AppState with SQLite storage.
        pub async fn new(config: &Config, auth: AuthState) -> Result<Self, anyhow::Error> {
            tracing::info!(path = %config.sqlite_path, "Opening SQLite storage");
            let store = SqliteStore::new(&config.sqlite_path).await?;
            Ok(Self::build(Arc::new(store), auth, config))
        }
    }
}
