use axum::extract::{Path, State};
use hangout_database::{Database, Response};
use hangout_models::v0;
use hangout_result::{create_error, Result};

use crate::util::json::Json;

/// # Submit Availability
///
/// Record the dates a participant cannot make.
///
/// Submitting again under the same name replaces the earlier dates.
#[utoipa::path(
    post,
    path = "/api/events/{id}/submit",
    tag = "Events",
    params(
        ("id" = String, Path, description = "Event id")
    ),
    request_body = v0::DataSubmitResponse,
    responses(
        (status = 200, description = "Response recorded", body = v0::SubmitResponseAck),
        (status = 400, description = "Name is missing", body = hangout_result::ErrorBody),
        (status = 500, description = "Internal server error", body = hangout_result::ErrorBody)
    )
)]
pub async fn submit(
    State(db): State<Database>,
    Path(id): Path<String>,
    Json(data): Json<v0::DataSubmitResponse>,
) -> Result<Json<v0::SubmitResponseAck>> {
    let name = data.name.filter(|name| !name.is_empty()).ok_or_else(|| {
        create_error!(FailedValidation {
            error: "Name required".to_string()
        })
    })?;

    Response::submit(&db, &id, name, data.unavailable_dates.unwrap_or_default()).await?;
    Ok(Json(v0::SubmitResponseAck { ok: true }))
}
