//! HTTP adapter for analytics endpoints.

mod handlers;
mod routes;

pub use handlers::{AnalyticsApiError, AnalyticsAppState};
pub use routes::{analytics_routes, reference_routes};
