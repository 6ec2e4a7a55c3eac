//! Key-value store contract and its SQLite implementation.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    EmptyKey,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::EmptyKey => write!(f, "storage key cannot be empty"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::EmptyKey => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Blob storage keyed by collection name.
pub trait KvStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    /// Returns whether a value was present.
    fn remove(&self, key: &str) -> StoreResult<bool>;
    /// All stored keys in ascending order.
    fn keys(&self) -> StoreResult<Vec<String>>;
}

/// `kv_store` table over a migrated connection.
#[derive(Clone, Copy)]
pub struct SqliteKvStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KvStore for SqliteKvStore<'_> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let key = checked_key(key)?;
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let key = checked_key(key)?;
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<bool> {
        let key = checked_key(key)?;
        let changed = self
            .conn
            .execute("DELETE FROM kv_store WHERE key = ?1;", [key])?;
        Ok(changed > 0)
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM kv_store ORDER BY key ASC;")?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }
}

fn checked_key(key: &str) -> StoreResult<&str> {
    if key.trim().is_empty() {
        return Err(StoreError::EmptyKey);
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::{KvStore, SqliteKvStore, StoreError};
    use crate::db::open_db_in_memory;

    #[test]
    fn missing_key_reads_as_none() {
        let conn = open_db_in_memory().unwrap();
        let store = SqliteKvStore::new(&conn);
        assert_eq!(store.get("diario").unwrap(), None);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let conn = open_db_in_memory().unwrap();
        let store = SqliteKvStore::new(&conn);

        store.set("tasks", "[]").unwrap();
        store.set("tasks", "[1]").unwrap();

        assert_eq!(store.get("tasks").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.keys().unwrap(), vec!["tasks".to_string()]);
    }

    #[test]
    fn remove_reports_presence() {
        let conn = open_db_in_memory().unwrap();
        let store = SqliteKvStore::new(&conn);
        store.set("audioNotes", "[]").unwrap();

        assert!(store.remove("audioNotes").unwrap());
        assert!(!store.remove("audioNotes").unwrap());
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn blank_keys_are_rejected() {
        let conn = open_db_in_memory().unwrap();
        let store = SqliteKvStore::new(&conn);
        assert!(matches!(store.set(" ", "x"), Err(StoreError::EmptyKey)));
    }
}
