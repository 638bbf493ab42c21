use axum::extract::{Path, State};
use hangout_database::Database;
use hangout_models::v0;
use hangout_result::Result;

use crate::util::json::Json;

/// # Fetch Event
///
/// Fetch an event along with every participant's unavailable dates.
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = "Events",
    params(
        ("id" = String, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event and responses", body = v0::EventWithResponses),
        (status = 404, description = "Unknown event", body = hangout_result::ErrorBody),
        (status = 500, description = "Internal server error", body = hangout_result::ErrorBody)
    )
)]
pub async fn fetch(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Json<v0::EventWithResponses>> {
    let event = db.fetch_event(&id).await?;
    let responses = db.fetch_responses_by_event(&id).await?;

    Ok(Json(event.with_responses(responses)))
}
