//! Key-value store backends.
//!
//! This module provides concrete implementations of the `KeyValueStore`
//! trait defined in `ruffnote_core::storage`. The backend is selected at
//! compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): ordered in-memory map, lost on restart
//! - `sqlite`: SQLite file using `rusqlite` and `tokio-rusqlite`
//!
//! These features are mutually exclusive.
//!
//! # Examples
//!
//! Build with SQLite:
//! ```bash
//! cargo build -p ruffnote --no-default-features --features sqlite
//! ```

#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!(
    "Features 'sqlite' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'sqlite' feature. \
    Example: cargo build -p ruffnote --no-default-features --features sqlite"
);

#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(any(feature = "inmemory", test))]
pub use inmemory::InMemoryStore;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
