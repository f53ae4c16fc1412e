use crate::error::StoreError;
use crate::store::KeyValueStore;
use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

const TABLE: &str = "local_storage";

/// SQLite-backed key-value store: one row per key.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self> {
        let shown = path.display();
        let conn =
            Connection::open(path).with_context(|| format!("Opening SQLite DB: {shown}"))?;
        tracing::info!(path = %shown, "opened workout store");
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Opening in-memory SQLite DB")?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self> {
        if !table_exists(&conn, TABLE)? {
            tracing::info!(table = TABLE, "creating key-value table");
        }
        conn.execute_batch(
            r"
            CREATE TABLE IF NOT EXISTS local_storage (
              key        TEXT PRIMARY KEY,
              value      TEXT NOT NULL,
              updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
            );
            ",
        )
        .context("Ensuring SQLite schema")?;
        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            r"
            INSERT INTO local_storage (key, value) VALUES (?1, ?2)
            ON CONFLICT (key) DO UPDATE SET
              value = excluded.value,
              updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
            ",
            params![key, value],
        )?;
        Ok(())
    }
}

fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1 LIMIT 1")?;
    let mut rows = stmt.query([table])?;
    Ok(rows.next()?.is_some())
}
