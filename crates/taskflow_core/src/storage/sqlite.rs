//! SQLite-backed key-value medium over the `kv_items` table.

use super::{KeyValueStorage, StorageResult};
use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};

/// Durable key-value storage borrowing a migrated connection.
pub struct SqliteStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStorage<'conn> {
    /// Wraps a connection returned by `open_db` / `open_db_in_memory`.
    ///
    /// # Errors
    /// - `DbError::SchemaNotMigrated` when migrations were not applied.
    /// - `DbError::UnsupportedSchemaVersion` when the file is newer than
    ///   this binary.
    pub fn try_new(conn: &'conn Connection) -> StorageResult<Self> {
        let db_version = current_user_version(conn)?;
        let latest = latest_version();
        if db_version < latest {
            return Err(DbError::SchemaNotMigrated {
                db_version,
                required: latest,
            }
            .into());
        }
        if db_version > latest {
            return Err(DbError::UnsupportedSchemaVersion {
                db_version,
                latest_supported: latest,
            }
            .into());
        }
        Ok(Self { conn })
    }
}

impl KeyValueStorage for SqliteStorage<'_> {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_items WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_items (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.conn
            .execute("DELETE FROM kv_items WHERE key = ?1;", [key])?;
        Ok(())
    }
}
