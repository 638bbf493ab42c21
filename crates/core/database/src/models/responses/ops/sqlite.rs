use hangout_config::report_internal_error;
use hangout_result::Result;
use rusqlite::{params, OptionalExtension, Row};

use crate::drivers::{json_column, timestamp_column};
use crate::SqliteDb;
use crate::{Response, ResponseCompositeKey};

use super::AbstractResponses;

static TABLE: &str = "responses";

fn from_row(row: &Row<'_>) -> rusqlite::Result<Response> {
    Ok(Response {
        id: ResponseCompositeKey {
            event: row.get(0)?,
            name: row.get(1)?,
        },
        unavailable_dates: json_column(row, 2)?,
        updated_at: timestamp_column(row, 3)?,
    })
}

#[async_trait]
impl AbstractResponses for SqliteDb {
    /// Insert a response, replacing any existing response with the same key
    async fn upsert_response(&self, response: &Response) -> Result<()> {
        let unavailable_json = report_internal_error!(serde_json::to_string(
            &response.unavailable_dates
        ))?;
        let response = response.clone();

        self.run("upsert", TABLE, move |conn| {
            conn.execute(
                "INSERT INTO responses (event_id, name, unavailable_json, updated_at)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(event_id, name) DO UPDATE SET
                   unavailable_json = excluded.unavailable_json,
                   updated_at = excluded.updated_at",
                params![
                    response.id.event,
                    response.id.name,
                    unavailable_json,
                    response.updated_at.to_string()
                ],
            )
            .map(|_| ())
        })
        .await
    }

    /// Fetch a participant's response to an event
    async fn fetch_response(&self, event_id: &str, name: &str) -> Result<Response> {
        let event_id = event_id.to_string();
        let name = name.to_string();

        self.run("fetch", TABLE, move |conn| {
            conn.query_row(
                "SELECT event_id, name, unavailable_json, updated_at
                 FROM responses WHERE event_id = ?1 AND name = ?2",
                params![event_id, name],
                from_row,
            )
            .optional()
        })
        .await?
        .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch all responses to an event, ordered by participant name
    async fn fetch_responses_by_event(&self, event_id: &str) -> Result<Vec<Response>> {
        let event_id = event_id.to_string();

        self.run("find", TABLE, move |conn| {
            let mut statement = conn.prepare(
                "SELECT event_id, name, unavailable_json, updated_at
                 FROM responses WHERE event_id = ?1
                 ORDER BY name",
            )?;

            let rows = statement.query_map(params![event_id], from_row)?;
            rows.collect()
        })
        .await
    }
}
