use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::{Error, ErrorBody, ErrorType};

impl ErrorType {
    /// HTTP status code corresponding to this error
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorType::LabelMe => StatusCode::INTERNAL_SERVER_ERROR,

            ErrorType::UnknownEvent => StatusCode::NOT_FOUND,

            ErrorType::FailedValidation { .. } => StatusCode::BAD_REQUEST,
            ErrorType::DeserializationError { .. } => StatusCode::BAD_REQUEST,

            ErrorType::DatabaseError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorType::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorType::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// HTTP response builder for Error enum
impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        (self.error_type.status(), Json(ErrorBody::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};

    use crate::{create_database_error, create_error};

    #[tokio::test]
    async fn validation_error_is_bad_request() {
        let response = create_error!(FailedValidation {
            error: "Name required".to_string()
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["type"], "FailedValidation");
        assert_eq!(value["error"], "Name required");
    }

    #[tokio::test]
    async fn database_error_does_not_leak() {
        let response = create_database_error!("insert", "events").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(!text.contains("events"));
        assert!(!text.contains("insert"));
        assert!(!text.contains(".rs"));
    }

    #[test]
    fn unknown_event_is_not_found() {
        assert_eq!(
            create_error!(UnknownEvent).into_response().status(),
            StatusCode::NOT_FOUND
        );
    }
}
