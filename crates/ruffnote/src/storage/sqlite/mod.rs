//! SQLite storage backend implementation.
//!
//! Implements `KeyValueStore` over a single `items` table using `rusqlite`
//! for synchronous operations and `tokio-rusqlite` for async wrapping.

mod error;
mod schema;
mod store;

pub use store::SqliteStore;
