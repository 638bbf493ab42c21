use axum::extract::State;
use hangout_database::{Database, Event};
use hangout_models::v0;
use hangout_result::{create_error, Result};

use crate::util::json::Json;

/// # Create Event
///
/// Create a new event and receive its shareable id.
#[utoipa::path(
    post,
    path = "/api/events",
    tag = "Events",
    request_body = v0::DataCreateEvent,
    responses(
        (status = 200, description = "Event created", body = v0::CreateEventResponse),
        (status = 400, description = "A required field is missing", body = hangout_result::ErrorBody),
        (status = 500, description = "Internal server error", body = hangout_result::ErrorBody)
    )
)]
pub async fn create(
    State(db): State<Database>,
    Json(data): Json<v0::DataCreateEvent>,
) -> Result<Json<v0::CreateEventResponse>> {
    let present = |field: Option<String>| field.filter(|value| !value.is_empty());

    let (Some(title), Some(start_date), Some(end_date)) = (
        present(data.title),
        present(data.start_date),
        present(data.end_date),
    ) else {
        return Err(create_error!(FailedValidation {
            error: "Missing fields: title, startDate, endDate".to_string()
        }));
    };

    let event = Event::create(&db, title, start_date, end_date).await?;
    Ok(Json(v0::CreateEventResponse { id: event.id }))
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use hangout_database::{util::idgen::is_event_id, Database};
    use serde_json::json;

    use crate::util::test::TestHarness;

    async fn count_events(harness: &TestHarness) -> i64 {
        let Database::Sqlite(sqlite) = &harness.db else {
            panic!("harness runs on SQLite");
        };

        sqlite
            .run("count", "events", |conn| {
                conn.query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn create_event() {
        let harness = TestHarness::new().await;

        let (status, body) = harness
            .post_json(
                "/api/events",
                json!({
                    "title": "Board games",
                    "startDate": "2024-06-01",
                    "endDate": "2024-06-14"
                }),
            )
            .await;

        assert_eq!(status, StatusCode::OK);

        let id = body["id"].as_str().expect("id");
        assert!(is_event_id(id));

        let event = harness.db.fetch_event(id).await.unwrap();
        assert_eq!(event.title, "Board games");
        assert_eq!(event.start_date, "2024-06-01");
        assert_eq!(event.end_date, "2024-06-14");
    }

    #[tokio::test]
    async fn missing_title_is_rejected() {
        let harness = TestHarness::new().await;

        let (status, body) = harness
            .post_json(
                "/api/events",
                json!({ "startDate": "2024-06-01", "endDate": "2024-06-14" }),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["type"], "FailedValidation");
        assert_eq!(body["error"], "Missing fields: title, startDate, endDate");
        assert_eq!(count_events(&harness).await, 0);
    }

    #[tokio::test]
    async fn empty_fields_are_missing() {
        let harness = TestHarness::new().await;

        let (status, _) = harness
            .post_json(
                "/api/events",
                json!({ "title": "", "startDate": "2024-06-01", "endDate": "2024-06-14" }),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn empty_body_is_rejected() {
        let harness = TestHarness::new().await;

        let (status, body) = harness.post("/api/events", "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["type"], "FailedValidation");
        assert_eq!(count_events(&harness).await, 0);
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let harness = TestHarness::new().await;

        let (status, body) = harness.post("/api/events", "{\"title\": ").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["type"], "DeserializationError");
    }

    #[tokio::test]
    async fn ids_are_distinct() {
        let harness = TestHarness::new().await;
        let mut ids = std::collections::HashSet::new();

        for _ in 0..20 {
            let (status, body) = harness
                .post_json(
                    "/api/events",
                    json!({ "title": "Lunch", "startDate": "2024-01-01", "endDate": "2024-01-02" }),
                )
                .await;

            assert_eq!(status, StatusCode::OK);
            assert!(ids.insert(body["id"].as_str().unwrap().to_string()));
        }
    }
}
