//! Axum router configuration for analytics endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    get_overview, get_registration_metrics, get_task_analytics, get_task_categories,
    get_task_load, AnalyticsAppState,
};

/// Analytics views, mounted at `/api/analytics`.
///
/// # Routes
/// - `GET /overview` - Totals, average efficiency, top performer
/// - `GET /tasks` - Task totals with the efficiency ranking
/// - `GET /registrations` - Standings, tiers and monthly growth
/// - `GET /task-load` - Per-member load relative to the busiest member
pub fn analytics_routes() -> Router<AnalyticsAppState> {
    Router::new()
        .route("/overview", get(get_overview))
        .route("/tasks", get(get_task_analytics))
        .route("/registrations", get(get_registration_metrics))
        .route("/task-load", get(get_task_load))
}

/// Reference-data views, merged at the root.
///
/// # Routes
/// - `GET /api/task-categories` - Categories with completion rates
pub fn reference_routes() -> Router<AnalyticsAppState> {
    Router::new().route("/api/task-categories", get(get_task_categories))
}
