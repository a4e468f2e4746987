//! HTTP handlers for analytics endpoints.
//!
//! Every request recomputes its view from a fresh snapshot.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::handlers::analytics::{
    AnalyticsError, GetOverviewHandler, GetRegistrationMetricsHandler, GetTaskAnalyticsHandler,
    GetTaskCategoriesHandler, GetTaskLoadHandler,
};
use crate::ports::{MemberRepository, ReferenceDataReader};

use super::super::error::ErrorResponse;

/// Shared state for analytics endpoints.
#[derive(Clone)]
pub struct AnalyticsAppState {
    pub member_repository: Arc<dyn MemberRepository>,
    pub reference_data: Arc<dyn ReferenceDataReader>,
}

impl AnalyticsAppState {
    pub fn new(
        member_repository: Arc<dyn MemberRepository>,
        reference_data: Arc<dyn ReferenceDataReader>,
    ) -> Self {
        Self {
            member_repository,
            reference_data,
        }
    }

    pub fn overview_handler(&self) -> GetOverviewHandler {
        GetOverviewHandler::new(self.member_repository.clone())
    }

    pub fn task_analytics_handler(&self) -> GetTaskAnalyticsHandler {
        GetTaskAnalyticsHandler::new(self.member_repository.clone())
    }

    pub fn registration_metrics_handler(&self) -> GetRegistrationMetricsHandler {
        GetRegistrationMetricsHandler::new(
            self.member_repository.clone(),
            self.reference_data.clone(),
        )
    }

    pub fn task_categories_handler(&self) -> GetTaskCategoriesHandler {
        GetTaskCategoriesHandler::new(self.reference_data.clone())
    }

    pub fn task_load_handler(&self) -> GetTaskLoadHandler {
        GetTaskLoadHandler::new(self.member_repository.clone())
    }
}

/// GET /api/analytics/overview
pub async fn get_overview(
    State(state): State<AnalyticsAppState>,
) -> Result<impl IntoResponse, AnalyticsApiError> {
    Ok(Json(state.overview_handler().handle().await?))
}

/// GET /api/analytics/tasks
pub async fn get_task_analytics(
    State(state): State<AnalyticsAppState>,
) -> Result<impl IntoResponse, AnalyticsApiError> {
    Ok(Json(state.task_analytics_handler().handle().await?))
}

/// GET /api/analytics/registrations
pub async fn get_registration_metrics(
    State(state): State<AnalyticsAppState>,
) -> Result<impl IntoResponse, AnalyticsApiError> {
    Ok(Json(state.registration_metrics_handler().handle().await?))
}

/// GET /api/analytics/task-load
pub async fn get_task_load(
    State(state): State<AnalyticsAppState>,
) -> Result<impl IntoResponse, AnalyticsApiError> {
    Ok(Json(state.task_load_handler().handle().await?))
}

/// GET /api/task-categories
pub async fn get_task_categories(
    State(state): State<AnalyticsAppState>,
) -> Result<impl IntoResponse, AnalyticsApiError> {
    Ok(Json(state.task_categories_handler().handle().await?))
}

/// API error type for analytics endpoints.
#[derive(Debug)]
pub struct AnalyticsApiError(AnalyticsError);

impl From<AnalyticsError> for AnalyticsApiError {
    fn from(err: AnalyticsError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AnalyticsApiError {
    fn into_response(self) -> Response {
        match self.0 {
            AnalyticsError::Database(msg) => {
                tracing::error!(error = %msg, "Analytics snapshot failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("DATABASE_ERROR", "Failed to load analytics data")),
                )
                    .into_response()
            }
        }
    }
}
