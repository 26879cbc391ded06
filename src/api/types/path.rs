//! Path extractor that reports bad parameters in the API error format

use axum::{
    extract::{FromRequestParts, Path as AxumPath},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::request_id::RequestId;

/// Wrapper around `axum::extract::Path` rejecting with `bad_request`
#[derive(Debug, Clone, Copy)]
pub struct Path<T>(pub T);

impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumPath::<T>::from_request_parts(parts, state).await {
            Ok(AxumPath(value)) => Ok(Path(value)),
            Err(rejection) => {
                let request_id = RequestId::from_headers(&parts.headers);

                Err(request_id.attach(ApiError::bad_request(format!(
                    "Invalid path parameter: {}",
                    rejection.body_text()
                ))))
            }
        }
    }
}
