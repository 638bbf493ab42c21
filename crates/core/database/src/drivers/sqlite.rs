use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use hangout_config::report_internal_error;
use hangout_result::Result;
use rusqlite::Connection;

database_derived!(
    /// SQLite implementation
    ///
    /// Holds a single long-lived connection, every statement runs
    /// on the blocking thread pool while holding the lock.
    pub struct SqliteDb(pub Arc<Mutex<Connection>>);
);

impl SqliteDb {
    /// Open (or create) a database file
    pub fn open<P: AsRef<Path>>(path: P) -> rusqlite::Result<SqliteDb> {
        let connection = Connection::open(path)?;
        Self::configure(&connection)?;
        Ok(SqliteDb(Arc::new(Mutex::new(connection))))
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> rusqlite::Result<SqliteDb> {
        let connection = Connection::open_in_memory()?;
        Self::configure(&connection)?;
        Ok(SqliteDb(Arc::new(Mutex::new(connection))))
    }

    /// Apply connection pragmas
    fn configure(connection: &Connection) -> rusqlite::Result<()> {
        connection.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA busy_timeout = 5000;
            ",
        )
    }

    /// Run a closure against the connection
    ///
    /// Failures are logged and surfaced as a database error
    /// naming the operation and table involved, a panic in `f`
    /// surfaces as an internal error.
    pub async fn run<T, F>(&self, operation: &'static str, table: &'static str, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
    {
        let connection = self.0.clone();

        report_internal_error!(
            tokio::task::spawn_blocking(move || {
                // A panicking statement is rolled back by SQLite, the connection stays usable
                let connection = connection.lock().unwrap_or_else(PoisonError::into_inner);

                f(&*connection).map_err(|err| {
                    error!("SQLite {operation} on {table} failed: {err}");
                    create_database_error!(operation, table)
                })
            })
            .await
        )?
    }
}

/// Read an ISO 8601 timestamp column
pub(crate) fn timestamp_column(
    row: &rusqlite::Row<'_>,
    index: usize,
) -> rusqlite::Result<iso8601_timestamp::Timestamp> {
    let value: String = row.get(index)?;
    iso8601_timestamp::Timestamp::parse(&value).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            index,
            rusqlite::types::Type::Text,
            format!("invalid timestamp {value:?}").into(),
        )
    })
}

/// Read a JSON-encoded text column
pub(crate) fn json_column<T: serde::de::DeserializeOwned>(
    row: &rusqlite::Row<'_>,
    index: usize,
) -> rusqlite::Result<T> {
    let value: String = row.get(index)?;
    serde_json::from_str(&value).map_err(|err| {
        rusqlite::Error::FromSqlConversionFailure(index, rusqlite::types::Type::Text, Box::new(err))
    })
}
