use hangout_result::Result;
use rusqlite::{params, OptionalExtension};

use crate::drivers::timestamp_column;
use crate::Event;
use crate::SqliteDb;

use super::AbstractEvents;

static TABLE: &str = "events";

#[async_trait]
impl AbstractEvents for SqliteDb {
    /// Insert a new event into the database
    async fn insert_event(&self, event: &Event) -> Result<()> {
        let event = event.clone();
        self.run("insert", TABLE, move |conn| {
            conn.execute(
                "INSERT INTO events (id, title, start_date, end_date, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    event.id,
                    event.title,
                    event.start_date,
                    event.end_date,
                    event.created_at.to_string()
                ],
            )
            .map(|_| ())
        })
        .await
    }

    /// Fetch an event by its id
    async fn fetch_event(&self, id: &str) -> Result<Event> {
        let id = id.to_string();
        self.run("fetch", TABLE, move |conn| {
            conn.query_row(
                "SELECT id, title, start_date, end_date, created_at
                 FROM events WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Event {
                        id: row.get(0)?,
                        title: row.get(1)?,
                        start_date: row.get(2)?,
                        end_date: row.get(3)?,
                        created_at: timestamp_column(row, 4)?,
                    })
                },
            )
            .optional()
        })
        .await?
        .ok_or_else(|| create_error!(UnknownEvent))
    }
}
