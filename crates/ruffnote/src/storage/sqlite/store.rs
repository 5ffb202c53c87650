//! SQLite key-value store implementation.

use std::time::Duration;

use async_trait::async_trait;
use rusqlite::{params, TransactionBehavior};
use tokio_rusqlite::Connection;

use ruffnote_core::storage::{KeyRange, KeyValueStore, RepositoryError, Result, Transaction};

use super::error::map_tokio_rusqlite_error;
use super::schema;

/// How long a statement waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

fn scan(conn: &rusqlite::Connection, range: &KeyRange, limit: usize) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare_cached(schema::SELECT_KEYS_IN_RANGE)?;
    let rows = stmt.query_map(params![range.start, range.end, limit as i64], |row| {
        row.get::<_, String>(0)
    })?;
    rows.collect()
}

/// SQLite-based store.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens a file-based database, creating the file and schema if needed.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a store backed by an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.busy_timeout(BUSY_TIMEOUT).map_err(wrap_err)?;
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn scan_keys(&self, range: &KeyRange, limit: usize) -> Result<Vec<String>> {
        let range = range.clone();

        self.conn
            .call(move |conn| scan(conn, &range, limit).map_err(wrap_err))
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn query_keys_by_owner(&self, owner: &str, limit: usize) -> Result<Vec<String>> {
        let owner = owner.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare_cached(schema::SELECT_KEYS_BY_OWNER)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map(params![owner, limit as i64], |row| row.get::<_, String>(0))
                    .map_err(wrap_err)?;

                let mut keys = Vec::new();
                for row_result in rows {
                    keys.push(row_result.map_err(wrap_err)?);
                }
                Ok(keys)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn commit(&self, transaction: Transaction) -> Result<()> {
        let committed = self
            .conn
            .call(move |conn| {
                // IMMEDIATE takes the write lock before validation reads.
                let tx = conn
                    .transaction_with_behavior(TransactionBehavior::Immediate)
                    .map_err(wrap_err)?;

                for observed in &transaction.observed {
                    let current = scan(&tx, &observed.range, observed.limit).map_err(wrap_err)?;
                    if current != observed.keys {
                        return Ok(false);
                    }
                }

                for record in &transaction.puts {
                    tx.execute(schema::UPSERT_ITEM, params![record.key, record.owner])
                        .map_err(wrap_err)?;
                }

                tx.commit().map_err(wrap_err)?;
                Ok(true)
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        if committed {
            Ok(())
        } else {
            Err(RepositoryError::ConcurrentModification(
                "observed range changed before commit".to_string(),
            ))
        }
    }

    async fn delete_multi(&self, keys: &[String]) -> Result<()> {
        let keys = keys.to_vec();

        self.conn
            .call(move |conn| {
                let mut first_error = None;
                let mut failed = 0usize;

                for key in &keys {
                    if let Err(e) = conn.execute(schema::DELETE_ITEM, params![key]) {
                        failed += 1;
                        first_error.get_or_insert(e);
                    }
                }

                match first_error {
                    Some(e) => {
                        tracing::warn!(failed, total = keys.len(), "Partial multi-key delete");
                        Err(wrap_err(e))
                    }
                    None => Ok(()),
                }
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}
