//! SQLite-backed key/value storage.
//!
//! # Responsibility
//! - Persist board records in the `storage_entries` table.
//! - Keep SQL details inside the storage boundary.
//!
//! # Invariants
//! - The connection must be fully migrated before use (`try_new` checks).
//! - One row per key; writes upsert.

use super::{StorageBackend, StorageResult};
use crate::db::migrations::ensure_current;
use rusqlite::{params, Connection, OptionalExtension};

/// Storage backend over a migrated SQLite connection.
pub struct SqliteStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStorage<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    ///
    /// # Errors
    /// - `DbError::SchemaNotMigrated` for a connection that skipped migrations.
    /// - `DbError::SchemaTooNew` for a database written by a newer build.
    pub fn try_new(conn: &'conn Connection) -> StorageResult<Self> {
        ensure_current(conn)?;
        Ok(Self { conn })
    }
}

impl StorageBackend for SqliteStorage<'_> {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM storage_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO storage_entries (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.conn
            .execute("DELETE FROM storage_entries WHERE key = ?1;", [key])?;
        Ok(())
    }
}
