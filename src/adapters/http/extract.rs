//! Request extractors that reject with the standard error body.

use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::error::ErrorResponse;

/// JSON body extractor.
///
/// Behaves like [`Json`], but an unreadable body becomes a 400 with an
/// [`ErrorResponse`] instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = MalformedBody;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(MalformedBody)?;
        Ok(Self(value))
    }
}

/// Rejection for a body that is not valid JSON or does not fit the request type.
#[derive(Debug)]
pub struct MalformedBody(JsonRejection);

impl IntoResponse for MalformedBody {
    fn into_response(self) -> Response {
        let message = self.0.body_text();
        tracing::debug!(error = %message, "Rejected request body");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(message)),
        )
            .into_response()
    }
}
