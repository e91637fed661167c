//! Router assembly

use std::time::Duration;

use axum::{
    http::HeaderName,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use sso_shared::constants::API_PREFIX;

use crate::handlers::{auth, health};
use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the service router. Requests exceeding `request_timeout` are
/// cancelled, which drops any in-flight store call with them.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let auth_routes = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login));

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Auth routes
        .nest(API_PREFIX, auth_routes)
        // Add State
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().include_headers(true)),
                )
                .layer(PropagateRequestIdLayer::new(request_id))
                .layer(TimeoutLayer::new(request_timeout)),
        )
}
