#[macro_use]
extern crate serde;

#[macro_use]
extern crate async_recursion;

#[macro_use]
extern crate async_trait;

#[macro_use]
extern crate tracing;

#[macro_use]
extern crate hangout_result;

#[cfg(feature = "sqlite")]
pub use rusqlite;

pub use iso8601_timestamp;

macro_rules! database_derived {
    ( $( $item:item )+ ) => {
        $(
            #[derive(Clone)]
            $item
        )+
    };
}

macro_rules! auto_derived {
    ( $( $item:item )+ ) => {
        $(
            #[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
            $item
        )+
    };
}

mod drivers;
pub use drivers::*;

/// Run a test body against every available database driver
#[cfg(test)]
macro_rules! database_test {
    ( | $db: ident | $test:expr ) => {
        for info in $crate::DatabaseInfo::test_drivers() {
            let db = info.connect().await.expect("Database connection failed.");
            db.migrate_database()
                .await
                .expect("Database migration failed.");

            #[allow(clippy::redundant_closure_call)]
            (|$db: $crate::Database| $test)(db.clone()).await;
        }
    };
}

mod models;
pub mod util;
pub use models::*;
