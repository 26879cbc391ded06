//! Panic-to-500 conversion for `CatchPanicLayer`

use std::any::Any;

use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::api::types::{ApiError, RequestId};

/// Marks a response produced by [`handle_panic`]
#[derive(Debug, Clone, Copy)]
struct RecoveredPanic;

/// Turn a handler panic into the generic internal error response
///
/// The request is gone at this point, so the body carries no request id;
/// [`tag_panic_response`] fills it in on the way out.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    error!(panic = %detail, "Handler panicked");

    let mut response = ApiError::internal().into_response();
    response.extensions_mut().insert(RecoveredPanic);
    response
}

/// Rebuild a recovered-panic response so its body names the request id.
/// Must sit directly outside the `CatchPanicLayer`.
pub async fn tag_panic_response(request: Request<Body>, next: Next) -> Response {
    let request_id = RequestId::from_headers(request.headers());
    let response = next.run(request).await;

    if response.extensions().get::<RecoveredPanic>().is_none() {
        return response;
    }

    request_id.attach(ApiError::internal()).into_response()
}
