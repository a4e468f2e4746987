//! Top-level API router.
//!
//! Mounts every endpoint under `/api` and applies request tracing, CORS and
//! request timeouts.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::{routing::get, Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::ports::{MemberRepository, ReferenceDataReader};

use super::analytics::{analytics_routes, reference_routes, AnalyticsAppState};
use super::members::dto::HealthResponse;
use super::members::{member_routes, MemberAppState};

pub const HEALTH_MESSAGE: &str = "Committee Performance Dashboard API is running!";

/// State for every API endpoint.
#[derive(Clone)]
pub struct ApiState {
    pub members: MemberAppState,
    pub analytics: AnalyticsAppState,
}

impl ApiState {
    pub fn new(
        member_repository: Arc<dyn MemberRepository>,
        reference_data: Arc<dyn ReferenceDataReader>,
    ) -> Self {
        Self {
            members: MemberAppState::new(member_repository.clone()),
            analytics: AnalyticsAppState::new(member_repository, reference_data),
        }
    }
}

/// GET /api/ - Liveness check
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: HEALTH_MESSAGE.to_string(),
    })
}

/// Routes under `/api` without middleware.
pub fn api_routes(state: ApiState) -> Router {
    Router::new()
        .route("/api", get(health))
        .route("/api/", get(health))
        .nest("/api/members", member_routes().with_state(state.members))
        .nest(
            "/api/analytics",
            analytics_routes().with_state(state.analytics.clone()),
        )
        .merge(reference_routes().with_state(state.analytics))
}

/// Full application router with middleware.
pub fn app_router(state: ApiState, server: &ServerConfig) -> Router {
    api_routes(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .allowed_origins()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
