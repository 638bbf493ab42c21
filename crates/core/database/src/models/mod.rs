mod admin_migrations;
mod events;
mod responses;

pub use admin_migrations::*;
pub use events::*;
pub use responses::*;

use crate::{Database, ReferenceDb};

#[cfg(feature = "sqlite")]
use crate::SqliteDb;

pub trait AbstractDatabase:
    Sync
    + Send
    + admin_migrations::AbstractMigrations
    + events::AbstractEvents
    + responses::AbstractResponses
{
}

impl AbstractDatabase for ReferenceDb {}
#[cfg(feature = "sqlite")]
impl AbstractDatabase for SqliteDb {}

impl std::ops::Deref for Database {
    type Target = dyn AbstractDatabase;

    fn deref(&self) -> &Self::Target {
        match &self {
            Database::Reference(dummy) => dummy,
            #[cfg(feature = "sqlite")]
            Database::Sqlite(sqlite) => sqlite,
        }
    }
}
