use serde::Serialize;
use utoipa::ToSchema;

use crate::util::json::Json;

/// Successful root response
#[derive(Serialize, Debug, ToSchema)]
pub struct RootResponse {
    hangout: &'static str,
    version: &'static str,
}

/// Capture crate version from Cargo
static CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Root response from service
#[utoipa::path(
    get,
    path = "/api",
    tag = "Misc",
    responses(
        (status = 200, description = "Echo response", body = RootResponse)
    )
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        hangout: "Hello, I am the Hangout API!",
        version: CRATE_VERSION,
    })
}
