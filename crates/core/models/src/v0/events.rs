use super::ParticipantResponse;

auto_derived!(
    /// Event
    pub struct Event {
        /// Shareable event id
        pub id: String,
        /// Event title
        pub title: String,
        /// First candidate date
        #[cfg_attr(feature = "serde", serde(rename = "startDate"))]
        pub start_date: String,
        /// Last candidate date
        #[cfg_attr(feature = "serde", serde(rename = "endDate"))]
        pub end_date: String,
        /// ISO 8601 time at which the event was created
        #[cfg_attr(feature = "serde", serde(rename = "createdAt"))]
        pub created_at: String,
    }

    /// Event along with every submitted response
    pub struct EventWithResponses {
        /// Event
        pub event: Event,
        /// Responses, ordered by participant name
        pub responses: Vec<ParticipantResponse>,
    }

    /// New event details
    ///
    /// All fields are required; they are optional here so that a
    /// missing field can be reported as a validation error.
    #[derive(Default)]
    pub struct DataCreateEvent {
        /// Event title
        #[cfg_attr(feature = "serde", serde(default))]
        pub title: Option<String>,
        /// First candidate date
        #[cfg_attr(feature = "serde", serde(rename = "startDate", default))]
        pub start_date: Option<String>,
        /// Last candidate date
        #[cfg_attr(feature = "serde", serde(rename = "endDate", default))]
        pub end_date: Option<String>,
    }

    /// Created event
    pub struct CreateEventResponse {
        /// Shareable event id
        pub id: String,
    }
);
