use hangout_result::Result;

use crate::Event;

mod reference;
#[cfg(feature = "sqlite")]
mod sqlite;

#[async_trait]
pub trait AbstractEvents: Sync + Send {
    /// Insert a new event into the database
    async fn insert_event(&self, event: &Event) -> Result<()>;

    /// Fetch an event by its id
    async fn fetch_event(&self, id: &str) -> Result<Event>;
}
