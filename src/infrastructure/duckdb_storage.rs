use crate::infrastructure::KeyValueStore;
use anyhow::{Context, Result};
use duckdb::{Connection, OptionalExt, params};
use std::path::Path;

/// Key-value storage kept in a single DuckDB table.
pub struct DuckDbStore {
    conn: Connection,
}

impl DuckDbStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref();
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create database directory {}", parent.display())
            })?;
        }

        let conn = Connection::open(db_path).context("Failed to open DuckDB connection")?;

        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .context("Failed to create in-memory DuckDB connection")?;

        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> Result<()> {
        self.conn
            .execute_batch(
                r#"
            CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            );
        "#,
            )
            .context("Failed to create kv_store table")?;
        Ok(())
    }
}

impl KeyValueStore for DuckDbStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .with_context(|| format!("Failed to read key {key}"))?;

        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?, ?, CURRENT_TIMESTAMP)",
                params![key, value],
            )
            .with_context(|| format!("Failed to write key {key}"))?;

        Ok(())
    }

    fn backend_info(&self) -> &str {
        "DuckDB Storage Backend v1.0"
    }
}
