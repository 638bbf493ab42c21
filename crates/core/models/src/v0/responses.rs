auto_derived!(
    /// A participant's unavailable dates
    pub struct ParticipantResponse {
        /// Participant name
        pub name: String,
        /// Dates on which the participant is unavailable
        pub unavailable: Vec<String>,
    }

    /// Response submission
    #[derive(Default)]
    pub struct DataSubmitResponse {
        /// Participant name
        #[cfg_attr(feature = "serde", serde(default))]
        pub name: Option<String>,
        /// Dates on which the participant is unavailable
        #[cfg_attr(feature = "serde", serde(rename = "unavailableDates", default))]
        pub unavailable_dates: Option<Vec<String>>,
    }

    /// Acknowledgement of a submitted response
    pub struct SubmitResponseAck {
        /// Always true
        pub ok: bool,
    }
);
