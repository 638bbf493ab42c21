use hangout_result::Result;
use iso8601_timestamp::Timestamp;

use crate::util::idgen::generate_event_id;
use crate::Database;

auto_derived!(
    /// Event
    pub struct Event {
        /// Shareable event id
        pub id: String,
        /// Event title
        pub title: String,
        /// First candidate date
        pub start_date: String,
        /// Last candidate date
        pub end_date: String,
        /// Time at which this event was created
        pub created_at: Timestamp,
    }
);

impl Event {
    /// Create a new event under a freshly generated id
    ///
    /// The id is not checked for uniqueness beforehand, a collision
    /// fails the insert and is reported as a database error.
    pub async fn create(
        db: &Database,
        title: String,
        start_date: String,
        end_date: String,
    ) -> Result<Event> {
        let event = Event {
            id: generate_event_id(),
            title,
            start_date,
            end_date,
            created_at: Timestamp::now_utc(),
        };

        db.insert_event(&event).await?;
        debug!("Created event {}.", event.id);
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use hangout_result::ErrorType;
    use iso8601_timestamp::Timestamp;

    use crate::util::idgen::is_event_id;
    use crate::Event;

    #[tokio::test]
    async fn create_and_fetch() {
        database_test!(|db| async move {
            let event = Event::create(
                &db,
                "Board games".to_string(),
                "2024-06-01".to_string(),
                "2024-06-14".to_string(),
            )
            .await
            .unwrap();

            assert!(is_event_id(&event.id));

            let fetched = db.fetch_event(&event.id).await.unwrap();
            assert_eq!(fetched.id, event.id);
            assert_eq!(fetched.title, "Board games");
            assert_eq!(fetched.start_date, "2024-06-01");
            assert_eq!(fetched.end_date, "2024-06-14");
        });
    }

    #[tokio::test]
    async fn fetch_unknown_event() {
        database_test!(|db| async move {
            let error = db.fetch_event("does-not-exist").await.unwrap_err();
            assert_eq!(error.error_type, ErrorType::UnknownEvent);
        });
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected() {
        database_test!(|db| async move {
            let event = Event {
                id: "ember-ember-ember-AAAAAAAA".to_string(),
                title: "First".to_string(),
                start_date: "2024-01-01".to_string(),
                end_date: "2024-01-02".to_string(),
                created_at: Timestamp::now_utc(),
            };

            db.insert_event(&event).await.unwrap();

            let duplicate = Event {
                title: "Second".to_string(),
                ..event.clone()
            };

            let error = db.insert_event(&duplicate).await.unwrap_err();
            assert!(matches!(error.error_type, ErrorType::DatabaseError { .. }));
            assert_eq!(db.fetch_event(&event.id).await.unwrap().title, "First");
        });
    }
}
