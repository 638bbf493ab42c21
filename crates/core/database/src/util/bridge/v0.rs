use hangout_models::v0::*;

impl From<crate::Event> for Event {
    fn from(value: crate::Event) -> Self {
        Event {
            id: value.id,
            title: value.title,
            start_date: value.start_date,
            end_date: value.end_date,
            created_at: value.created_at.to_string(),
        }
    }
}

impl From<crate::Response> for ParticipantResponse {
    fn from(value: crate::Response) -> Self {
        ParticipantResponse {
            name: value.id.name,
            unavailable: value.unavailable_dates,
        }
    }
}

impl crate::Event {
    /// Attach the given responses to this event
    pub fn with_responses(self, responses: Vec<crate::Response>) -> EventWithResponses {
        EventWithResponses {
            event: self.into(),
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }
}
