//! HTTP handlers for member endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::handlers::member::{
    CreateMemberCommand, CreateMemberHandler, DeleteMemberCommand, DeleteMemberHandler,
    GetMemberHandler, GetMemberQuery, ListMembersHandler, ListMembersQuery, PatchMemberCommand,
    PatchMemberHandler, RecordPerformanceCommand, RecordPerformanceHandler, ReplaceMemberCommand,
    ReplaceMemberHandler,
};
use crate::domain::foundation::MemberId;
use crate::domain::member::{MemberChanges, MemberDetails, MemberError};
use crate::ports::MemberRepository;

use super::super::error::ErrorResponse;
use super::super::extract::ApiJson;
use super::dto::{ListMembersParams, MemberPatchRequest, MemberRequest, RecordPerformanceRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for member endpoints.
///
/// Cloned for each request; handlers are created on demand from the repository.
#[derive(Clone)]
pub struct MemberAppState {
    pub member_repository: Arc<dyn MemberRepository>,
}

impl MemberAppState {
    pub fn new(member_repository: Arc<dyn MemberRepository>) -> Self {
        Self { member_repository }
    }

    pub fn create_handler(&self) -> CreateMemberHandler {
        CreateMemberHandler::new(self.member_repository.clone())
    }

    pub fn replace_handler(&self) -> ReplaceMemberHandler {
        ReplaceMemberHandler::new(self.member_repository.clone())
    }

    pub fn patch_handler(&self) -> PatchMemberHandler {
        PatchMemberHandler::new(self.member_repository.clone())
    }

    pub fn delete_handler(&self) -> DeleteMemberHandler {
        DeleteMemberHandler::new(self.member_repository.clone())
    }

    pub fn record_performance_handler(&self) -> RecordPerformanceHandler {
        RecordPerformanceHandler::new(self.member_repository.clone())
    }

    pub fn get_handler(&self) -> GetMemberHandler {
        GetMemberHandler::new(self.member_repository.clone())
    }

    pub fn list_handler(&self) -> ListMembersHandler {
        ListMembersHandler::new(self.member_repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/members?search= - List members
pub async fn list_members(
    State(state): State<MemberAppState>,
    Query(params): Query<ListMembersParams>,
) -> Result<impl IntoResponse, MemberApiError> {
    let members = state
        .list_handler()
        .handle(ListMembersQuery {
            search: params.search,
        })
        .await?;
    Ok(Json(members))
}

/// GET /api/members/:id - Get one member
pub async fn get_member(
    State(state): State<MemberAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, MemberApiError> {
    let member_id = parse_member_id(&id)?;
    let member = state
        .get_handler()
        .handle(GetMemberQuery { member_id })
        .await?;
    Ok(Json(member))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/members - Add a member
pub async fn create_member(
    State(state): State<MemberAppState>,
    ApiJson(request): ApiJson<MemberRequest>,
) -> Result<impl IntoResponse, MemberApiError> {
    let details = MemberDetails::try_from(request)?;
    let member = state
        .create_handler()
        .handle(CreateMemberCommand { details })
        .await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// PUT /api/members/:id - Replace a member
pub async fn replace_member(
    State(state): State<MemberAppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<MemberRequest>,
) -> Result<impl IntoResponse, MemberApiError> {
    let member_id = parse_member_id(&id)?;
    let details = MemberDetails::try_from(request)?;
    let member = state
        .replace_handler()
        .handle(ReplaceMemberCommand { member_id, details })
        .await?;
    Ok(Json(member))
}

/// PATCH /api/members/:id - Update the provided fields
pub async fn patch_member(
    State(state): State<MemberAppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<MemberPatchRequest>,
) -> Result<impl IntoResponse, MemberApiError> {
    let member_id = parse_member_id(&id)?;
    let changes = MemberChanges::try_from(request)?;
    let member = state
        .patch_handler()
        .handle(PatchMemberCommand { member_id, changes })
        .await?;
    Ok(Json(member))
}

/// DELETE /api/members/:id - Remove a member
pub async fn delete_member(
    State(state): State<MemberAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, MemberApiError> {
    let member_id = parse_member_id(&id)?;
    state
        .delete_handler()
        .handle(DeleteMemberCommand { member_id })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/members/:id/performance - Append a monthly score
pub async fn record_performance(
    State(state): State<MemberAppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<RecordPerformanceRequest>,
) -> Result<impl IntoResponse, MemberApiError> {
    let member_id = parse_member_id(&id)?;
    let member = state
        .record_performance_handler()
        .handle(RecordPerformanceCommand {
            member_id,
            month: request.month,
            score: request.score,
        })
        .await?;
    Ok(Json(member))
}

fn parse_member_id(raw: &str) -> Result<MemberId, MemberApiError> {
    raw.parse::<MemberId>()
        .map_err(|_| MemberApiError(MemberError::validation("id", "Invalid member ID")))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts member errors to HTTP responses.
#[derive(Debug)]
pub struct MemberApiError(MemberError);

impl From<MemberError> for MemberApiError {
    fn from(err: MemberError) -> Self {
        Self(err)
    }
}

impl IntoResponse for MemberApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            MemberError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::not_found("Member", &id.to_string()),
            ),
            MemberError::ValidationFailed { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("VALIDATION_FAILED", message)
                    .with_details(serde_json::json!({ "field": field })),
            ),
            MemberError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "Member request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal("Internal server error"),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
