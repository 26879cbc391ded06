use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use super::health;
use super::middleware::{
    handle_panic, request_logging_middleware, tag_panic_response, MakeRequestHexId,
};
use super::state::AppState;
use super::users;

/// Router-level switches
#[derive(Debug, Clone, Copy)]
pub struct RouterOptions {
    /// Log one line per request
    pub request_log: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self { request_log: true }
    }
}

/// Create the full router with application state
pub fn create_router(state: AppState, options: RouterOptions) -> Router {
    let mut router = Router::new()
        .route("/health", get(health::health_check))
        .route("/users", post(users::create_user))
        .route(
            "/users/{user_id}",
            get(users::get_user).delete(users::delete_user),
        )
        .route("/users/{user_id}/email", put(users::update_user_email))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(tag_panic_response));

    if options.request_log {
        router = router.layer(middleware::from_fn(request_logging_middleware));
    }

    // Outermost first on the way in: assign id, open span, echo id back
    router
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestHexId))
}
