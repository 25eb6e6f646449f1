use std::time::Duration;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod auth;
pub mod delivery;
pub mod lookup;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router.
///
/// Requests running longer than `request_timeout` are answered with 408.
pub fn build_router(state: ServerState, cors: CorsLayer, request_timeout: Duration) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    let accounts = Router::new()
        .route("/api/rider/register", post(auth::register_rider))
        .route("/api/user/register", post(auth::register_user))
        .route("/api/auth/login", post(auth::login));

    let deliveries = Router::new()
        .route("/create-delivery", post(delivery::create_delivery))
        .route("/get/list_user_send/:sender_id", post(delivery::list_user_send))
        .route("/search-user", post(lookup::search_user))
        .route("/get/rider/:rider_id", post(lookup::rider_license));

    public
        .merge(accounts)
        .merge(deliveries)
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and other failures
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
