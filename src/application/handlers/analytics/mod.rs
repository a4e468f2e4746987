//! Analytics query handlers.
//!
//! Each handler loads a fresh snapshot through the ports and hands it to the
//! pure aggregation engine.

mod errors;
mod get_overview;
mod get_registration_metrics;
mod get_task_analytics;
mod get_task_categories;
mod get_task_load;

pub use errors::AnalyticsError;
pub use get_overview::GetOverviewHandler;
pub use get_registration_metrics::GetRegistrationMetricsHandler;
pub use get_task_analytics::GetTaskAnalyticsHandler;
pub use get_task_categories::GetTaskCategoriesHandler;
pub use get_task_load::GetTaskLoadHandler;
