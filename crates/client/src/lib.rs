//! ruffnote_client - typed client and CLI for the ruffnote item API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::RuffnoteClient;
pub use error::{ClientError, Result};
