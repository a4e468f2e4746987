//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter for endpoint exposure; `router` mounts
//! them all under `/api`.

pub mod analytics;
mod error;
mod extract;
pub mod members;
mod router;

pub use analytics::{AnalyticsAppState, analytics_routes};
pub use error::ErrorResponse;
pub use extract::{ApiJson, MalformedBody};
pub use members::{MemberAppState, member_routes};
pub use router::{api_routes, app_router, ApiState, HEALTH_MESSAGE};
