//! Item CLI commands.

use clap::{Parser, Subcommand};

/// Item management commands.
#[derive(Debug, Parser)]
pub struct ItemsCommand {
    #[command(subcommand)]
    pub action: ItemsAction,
}

/// Available item actions.
#[derive(Debug, Subcommand)]
pub enum ItemsAction {
    /// List your items.
    List {
        /// Maximum number of items (server clamps to 1..=100).
        #[arg(long)]
        limit: Option<i64>,
    },
    /// Check whether a name is unused.
    Available {
        /// Item name.
        name: String,
    },
    /// Create an item.
    Create {
        /// Item name.
        name: String,
    },
    /// Rename an item.
    Rename {
        /// Item local id.
        id: String,
        /// New name.
        name: String,
    },
    /// Delete every item with the given local id.
    Delete {
        /// Item local id.
        id: String,
    },
}
