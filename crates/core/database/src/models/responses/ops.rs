use hangout_result::Result;

use crate::Response;

mod reference;
#[cfg(feature = "sqlite")]
mod sqlite;

#[async_trait]
pub trait AbstractResponses: Sync + Send {
    /// Insert a response, replacing any existing response with the same key
    async fn upsert_response(&self, response: &Response) -> Result<()>;

    /// Fetch a participant's response to an event
    async fn fetch_response(&self, event_id: &str, name: &str) -> Result<Response>;

    /// Fetch all responses to an event, ordered by participant name
    async fn fetch_responses_by_event(&self, event_id: &str) -> Result<Vec<Response>>;
}
