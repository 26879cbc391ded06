//! Request id generation for the tower-http request id layers

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Generates request ids as 32 lowercase hex characters (UUIDv4, no dashes)
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestHexId;

impl MakeRequestId for MakeRequestHexId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().simple().to_string();

        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}
