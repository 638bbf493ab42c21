use hangout_result::Result;

mod reference;
#[cfg(feature = "sqlite")]
mod sqlite;

#[async_trait]
pub trait AbstractMigrations: Sync + Send {
    /// Migrate the database
    async fn migrate_database(&self) -> Result<()>;
}
