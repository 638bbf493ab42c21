use hangout_result::Result;
use iso8601_timestamp::Timestamp;

use crate::Database;

auto_derived!(
    /// Participant response to an event
    pub struct Response {
        /// Unique response id
        pub id: ResponseCompositeKey,
        /// Dates on which the participant is unavailable
        pub unavailable_dates: Vec<String>,
        /// Time at which this response was last submitted
        pub updated_at: Timestamp,
    }

    /// Composite primary key consisting of event id and participant name
    #[derive(Hash, Default)]
    pub struct ResponseCompositeKey {
        /// Event Id
        pub event: String,
        /// Participant name
        pub name: String,
    }
);

impl Response {
    /// Submit a participant's unavailable dates
    ///
    /// Resubmitting under the same name replaces the previous list.
    /// The event is not required to exist.
    pub async fn submit(
        db: &Database,
        event_id: &str,
        name: String,
        unavailable_dates: Vec<String>,
    ) -> Result<Response> {
        let response = Response {
            id: ResponseCompositeKey {
                event: event_id.to_string(),
                name,
            },
            unavailable_dates,
            updated_at: Timestamp::now_utc(),
        };

        db.upsert_response(&response).await?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use futures::future::join_all;
    use hangout_result::ErrorType;

    use crate::{Event, Response};

    #[tokio::test]
    async fn resubmission_replaces_dates() {
        database_test!(|db| async move {
            let event = Event::create(
                &db,
                "Dinner".to_string(),
                "2024-06-01".to_string(),
                "2024-06-07".to_string(),
            )
            .await
            .unwrap();

            Response::submit(
                &db,
                &event.id,
                "Alice".to_string(),
                vec!["2024-06-01".to_string()],
            )
            .await
            .unwrap();

            let second = Response::submit(
                &db,
                &event.id,
                "Alice".to_string(),
                vec!["2024-06-02".to_string(), "2024-06-03".to_string()],
            )
            .await
            .unwrap();

            let responses = db.fetch_responses_by_event(&event.id).await.unwrap();
            assert_eq!(responses.len(), 1);
            assert_eq!(
                responses[0].unavailable_dates,
                vec!["2024-06-02".to_string(), "2024-06-03".to_string()]
            );
            assert_eq!(responses[0].id, second.id);
        });
    }

    #[tokio::test]
    async fn concurrent_resubmission_keeps_one_response() {
        database_test!(|db| async move {
            let submissions: Vec<Vec<String>> = (1..=16)
                .map(|day| vec![format!("2024-06-{day:02}")])
                .collect();

            let results = join_all(submissions.iter().cloned().map(|dates| {
                let db = db.clone();
                tokio::spawn(async move {
                    Response::submit(&db, "busy-event", "Alice".to_string(), dates).await
                })
            }))
            .await;

            for result in results {
                result.unwrap().unwrap();
            }

            let responses = db.fetch_responses_by_event("busy-event").await.unwrap();
            assert_eq!(responses.len(), 1);
            assert!(submissions.contains(&responses[0].unavailable_dates));
        });
    }

    #[tokio::test]
    async fn responses_are_kept_per_participant() {
        database_test!(|db| async move {
            let event = Event::create(
                &db,
                "Hike".to_string(),
                "2024-07-01".to_string(),
                "2024-07-03".to_string(),
            )
            .await
            .unwrap();

            let other = Event::create(
                &db,
                "Other".to_string(),
                "2024-07-01".to_string(),
                "2024-07-03".to_string(),
            )
            .await
            .unwrap();

            Response::submit(&db, &event.id, "Zoe".to_string(), vec![])
                .await
                .unwrap();
            Response::submit(&db, &event.id, "Bob".to_string(), vec![])
                .await
                .unwrap();
            Response::submit(&db, &other.id, "Carol".to_string(), vec![])
                .await
                .unwrap();

            let names: Vec<String> = db
                .fetch_responses_by_event(&event.id)
                .await
                .unwrap()
                .into_iter()
                .map(|response| response.id.name)
                .collect();

            assert_eq!(names, vec!["Bob".to_string(), "Zoe".to_string()]);
        });
    }

    #[tokio::test]
    async fn names_are_case_sensitive() {
        database_test!(|db| async move {
            Response::submit(&db, "some-event", "alice".to_string(), vec![])
                .await
                .unwrap();
            Response::submit(&db, "some-event", "Alice".to_string(), vec![])
                .await
                .unwrap();

            assert_eq!(
                db.fetch_responses_by_event("some-event").await.unwrap().len(),
                2
            );
        });
    }

    #[tokio::test]
    async fn response_without_event_is_recorded() {
        database_test!(|db| async move {
            Response::submit(
                &db,
                "no-such-event",
                "Bob".to_string(),
                vec!["2024-01-01".to_string()],
            )
            .await
            .unwrap();

            let response = db.fetch_response("no-such-event", "Bob").await.unwrap();
            assert_eq!(response.unavailable_dates, vec!["2024-01-01".to_string()]);

            let error = db.fetch_response("no-such-event", "Eve").await.unwrap_err();
            assert_eq!(error.error_type, ErrorType::NotFound);
        });
    }

    #[tokio::test]
    async fn no_responses_yet() {
        database_test!(|db| async move {
            assert!(db
                .fetch_responses_by_event("quiet-event")
                .await
                .unwrap()
                .is_empty());
        });
    }
}
