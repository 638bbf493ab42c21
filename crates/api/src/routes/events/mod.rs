use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub mod create;
pub mod fetch;
pub mod submit;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create::create))
        .route("/:id", get(fetch::fetch))
        .route("/:id/submit", post(submit::submit))
}
