use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use hangout_result::{create_error, Error};
use serde::{de::DeserializeOwned, Serialize};

/// JSON request and response body
///
/// Request bodies are parsed regardless of `Content-Type` and an empty
/// body is read as `{}`, so that missing fields surface as validation
/// errors rather than as a rejected request.
pub struct Json<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            create_error!(DeserializationError {
                error: rejection.body_text()
            })
        })?;

        let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &bytes
        };

        serde_json::from_slice(body).map(Json).map_err(|error| {
            create_error!(DeserializationError {
                error: error.to_string()
            })
        })
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
