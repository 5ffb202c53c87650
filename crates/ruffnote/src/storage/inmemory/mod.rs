//! In-memory storage backend.
//!
//! Records live in a `BTreeMap` wrapped in `Arc<RwLock<_>>`, so range scans
//! see keys in the same byte-wise order SQLite uses. Data is not persisted.
//!
//! # Example
//!
//! ```rust,ignore
//! use ruffnote::storage::inmemory::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! ```

mod store;

pub use store::InMemoryStore;
