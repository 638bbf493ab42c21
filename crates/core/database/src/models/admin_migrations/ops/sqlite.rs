use hangout_result::Result;

use crate::SqliteDb;

use super::AbstractMigrations;

mod scripts;

#[async_trait]
impl AbstractMigrations for SqliteDb {
    /// Migrate the database
    async fn migrate_database(&self) -> Result<()> {
        info!("Migrating the database.");

        let revision = self.run("migrate", "schema", scripts::migrate_database).await?;

        info!("Migration complete. Currently at revision {}.", revision);
        Ok(())
    }
}
