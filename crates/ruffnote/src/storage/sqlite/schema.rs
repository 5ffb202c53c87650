//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// Creates the items table and its owner index.
///
/// `key` uses the default BINARY collation so range scans compare keys
/// byte-wise.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    key TEXT PRIMARY KEY NOT NULL,
    owner TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_items_owner ON items(owner);
"#;

pub const SELECT_KEYS_IN_RANGE: &str = r#"
SELECT key FROM items
WHERE key >= ?1 AND key < ?2
ORDER BY key
LIMIT ?3
"#;

pub const SELECT_KEYS_BY_OWNER: &str = r#"
SELECT key FROM items
WHERE owner = ?1
LIMIT ?2
"#;

pub const UPSERT_ITEM: &str = r#"
INSERT INTO items (key, owner) VALUES (?1, ?2)
ON CONFLICT(key) DO UPDATE SET owner = excluded.owner
"#;

pub const DELETE_ITEM: &str = "DELETE FROM items WHERE key = ?1";
