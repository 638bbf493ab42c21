use hangout_result::Result;

use crate::ReferenceDb;
use crate::{Response, ResponseCompositeKey};

use super::AbstractResponses;

#[async_trait]
impl AbstractResponses for ReferenceDb {
    /// Insert a response, replacing any existing response with the same key
    async fn upsert_response(&self, response: &Response) -> Result<()> {
        let mut responses = self.responses.lock().await;
        responses.insert(response.id.clone(), response.clone());
        Ok(())
    }

    /// Fetch a participant's response to an event
    async fn fetch_response(&self, event_id: &str, name: &str) -> Result<Response> {
        let responses = self.responses.lock().await;
        responses
            .get(&ResponseCompositeKey {
                event: event_id.to_string(),
                name: name.to_string(),
            })
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch all responses to an event, ordered by participant name
    async fn fetch_responses_by_event(&self, event_id: &str) -> Result<Vec<Response>> {
        let responses = self.responses.lock().await;
        let mut responses: Vec<Response> = responses
            .values()
            .filter(|response| response.id.event == event_id)
            .cloned()
            .collect();

        responses.sort_by(|a, b| a.id.name.cmp(&b.id.name));
        Ok(responses)
    }
}
