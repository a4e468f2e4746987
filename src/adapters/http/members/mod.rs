//! HTTP adapter for member endpoints.
//!
//! Exposes the member store via REST API:
//! - `GET /api/members` - List members, optionally filtered by `search`
//! - `POST /api/members` - Add a member
//! - `GET|PUT|PATCH|DELETE /api/members/:id` - Read, replace, patch or remove
//! - `POST /api/members/:id/performance` - Append a monthly score

pub mod dto;
mod handlers;
mod routes;

pub use handlers::{MemberApiError, MemberAppState};
pub use routes::member_routes;
