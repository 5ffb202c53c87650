//! Functional core of the ruffnote item registry.
//!
//! Pure types and functions plus the traits for the two external
//! collaborators (key-value store and identity provider). No I/O lives here.

pub mod auth;
pub mod item;
pub mod serde;
pub mod service;
pub mod storage;
