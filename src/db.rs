#[cfg(feature = "ssr")]
mod db_impl {
    use crate::error::StorageError;
    use crate::storage::Storage;
    use leptos::logging;
    use rusqlite::{params, Connection, Error, OptionalExtension};
    use std::sync::{Mutex, MutexGuard, PoisonError};


    /// SQLite-backed key-value storage used by the server.
    pub struct Database {
        conn: Mutex<Connection>,
    }

    impl Database {
        // Create a new database connection
        pub fn new(db_path: &str) -> Result<Self, Error> {
            let conn = Connection::open(db_path)?;
            logging::log!("[DB] Database connection established at: {}", db_path);
            Ok(Database {
                conn: Mutex::new(conn),
            })
        }

        fn conn(&self) -> MutexGuard<'_, Connection> {
            self.conn.lock().unwrap_or_else(PoisonError::into_inner)
        }

        pub fn create_schema(&self) -> Result<(), Error> {
            let conn = self.conn();
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS kv_store (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                );",
            )
            .map_err(|e| {
                logging::error!("[DB] Failed creating kv_store table: {}", e);
                e
            })?;
            logging::log!("[DB] Schema ready");
            Ok(())
        }
    }

    impl Storage for Database {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            let value = self
                .conn()
                .query_row("SELECT value FROM kv_store WHERE key = ?", [key], |row| {
                    row.get(0)
                })
                .optional()?;
            Ok(value)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let updated_at = chrono::Utc::now().to_rfc3339();
            self.conn().execute(
                "INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?, ?, ?)",
                params![key, value, updated_at],
            )?;
            logging::log!("[DB] Stored {} bytes under '{}'", value.len(), key);
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.conn()
                .execute("DELETE FROM kv_store WHERE key = ?", [key])?;
            Ok(())
        }
    }
}

#[cfg(feature = "ssr")]
pub use db_impl::Database;
