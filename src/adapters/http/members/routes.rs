//! Axum router configuration for member endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_member, delete_member, get_member, list_members, patch_member, record_performance,
    replace_member, MemberAppState,
};

/// Create the member API router, mounted at `/api/members`.
///
/// # Routes
/// - `GET /` - List members (optional `?search=`)
/// - `POST /` - Add a member
/// - `GET /:id` - Get a member
/// - `PUT /:id` - Replace a member
/// - `PATCH /:id` - Update provided fields
/// - `DELETE /:id` - Remove a member
/// - `POST /:id/performance` - Append a monthly score
pub fn member_routes() -> Router<MemberAppState> {
    Router::new()
        .route("/", get(list_members).post(create_member))
        .route(
            "/:id",
            get(get_member)
                .put(replace_member)
                .patch(patch_member)
                .delete(delete_member),
        )
        .route("/:id/performance", post(record_performance))
}
