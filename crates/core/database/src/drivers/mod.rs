mod reference;
#[cfg(feature = "sqlite")]
mod sqlite;

use hangout_config::config;

pub use self::reference::*;
#[cfg(feature = "sqlite")]
pub use self::sqlite::*;

/// Database information to use to create a client
pub enum DatabaseInfo {
    /// Auto-detect the database in use
    Auto,
    /// Use the mock database
    Reference,
    /// Open (or create) a SQLite database file
    #[cfg(feature = "sqlite")]
    Sqlite { path: String },
    /// Use a private in-memory SQLite database
    #[cfg(feature = "sqlite")]
    SqliteMemory,
}

/// Database
#[derive(Clone)]
pub enum Database {
    /// Mock database
    Reference(ReferenceDb),
    /// SQLite database
    #[cfg(feature = "sqlite")]
    Sqlite(SqliteDb),
}

impl DatabaseInfo {
    /// Create a database client from the given database information
    #[async_recursion]
    pub async fn connect(self) -> Result<Database, String> {
        match self {
            DatabaseInfo::Auto => {
                let config = config().await;

                if config.database.sqlite.is_empty() {
                    info!("No database file configured, using the reference database.");
                    DatabaseInfo::Reference.connect().await
                } else {
                    #[cfg(feature = "sqlite")]
                    return DatabaseInfo::Sqlite {
                        path: config.database.sqlite,
                    }
                    .connect()
                    .await;

                    #[cfg(not(feature = "sqlite"))]
                    return Err("SQLite not enabled.".to_string());
                }
            }
            DatabaseInfo::Reference => Ok(Database::Reference(Default::default())),
            #[cfg(feature = "sqlite")]
            DatabaseInfo::Sqlite { path } => {
                info!("Opening SQLite database at {path}.");
                SqliteDb::open(&path)
                    .map(Database::Sqlite)
                    .map_err(|error| format!("Failed to open database at {path}: {error}"))
            }
            #[cfg(feature = "sqlite")]
            DatabaseInfo::SqliteMemory => SqliteDb::open_in_memory()
                .map(Database::Sqlite)
                .map_err(|error| format!("Failed to open in-memory database: {error}")),
        }
    }

    /// Every driver that tests should be run against
    #[cfg(test)]
    pub fn test_drivers() -> Vec<DatabaseInfo> {
        vec![
            DatabaseInfo::Reference,
            #[cfg(feature = "sqlite")]
            DatabaseInfo::SqliteMemory,
        ]
    }
}
