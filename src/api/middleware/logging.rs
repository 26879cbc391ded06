//! Per-request access logging

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    body::Body,
    extract::{ConnectInfo, MatchedPath},
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::info;

use crate::api::types::RequestId;

/// Middleware logging one line per request once the response is ready.
/// Note: This middleware does NOT create its own tracing span since `TraceLayer`
/// from tower-http already handles span creation.
pub async fn request_logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = extract_path(&request);
    let request_id = RequestId::from_headers(request.headers());
    let client_ip = extract_client_ip(&request);

    let response = next.run(request).await;

    info!(
        request_id = request_id.as_deref().unwrap_or("-"),
        method = %method,
        path = %path,
        status_code = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        client_ip = client_ip.as_deref().unwrap_or("-"),
        "request"
    );

    response
}

fn extract_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

fn extract_client_ip(request: &Request<Body>) -> Option<String> {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
}
