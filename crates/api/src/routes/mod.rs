use axum::{routing::get, Router};
use hangout_models::v0;
use utoipa::OpenApi;

use crate::AppState;

pub mod events;
pub mod root;

#[derive(OpenApi)]
#[openapi(
    info(title = "Hangout API"),
    paths(
        root::root,
        events::create::create,
        events::fetch::fetch,
        events::submit::submit,
    ),
    tags(
        (name = "Misc", description = "Service information."),
        (name = "Events", description = "Create events and collect availability.")
    ),
    components(
        schemas(
            hangout_result::ErrorBody,
            root::RootResponse,
            v0::Event,
            v0::EventWithResponses,
            v0::ParticipantResponse,
            v0::DataCreateEvent,
            v0::CreateEventResponse,
            v0::DataSubmitResponse,
            v0::SubmitResponseAck,
        )
    ),
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root::root))
        .nest("/events", events::router())
}
