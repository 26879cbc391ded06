//! Custom JSON extractor that returns errors in the API error format

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::request_id::RequestId;

/// JSON extractor for request objects
///
/// The body is parsed whatever the Content-Type says. It must be a JSON
/// object; every rejection becomes a `bad_request` error carrying the
/// request id.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let request_id = RequestId::from_headers(req.headers());

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            request_id.attach(ApiError::bad_request(format!(
                "Failed to read request body: {}",
                rejection.body_text()
            )))
        })?;

        parse_object(&bytes)
            .map(Json)
            .map_err(|err| request_id.attach(err))
    }
}

/// Parse a body that must hold a JSON object
fn parse_object<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let value: serde_json::Value = serde_json::from_slice(bytes)
        .map_err(|e| ApiError::bad_request(format!("Invalid JSON syntax: {}", e)))?;

    if !value.is_object() {
        return Err(ApiError::bad_request("Request body must be a JSON object"));
    }

    serde_json::from_value(value)
        .map_err(|e| ApiError::bad_request(format!("Invalid JSON data: {}", e)))
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}
