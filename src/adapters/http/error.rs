//! Standard error body shared by every endpoint.

use serde::Serialize;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource_type, id))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_bad_request_creates_correctly() {
        let error = ErrorResponse::bad_request("Invalid input");
        assert_eq!(error.code, "BAD_REQUEST");
        assert_eq!(error.message, "Invalid input");
        assert!(error.details.is_none());
    }

    #[test]
    fn error_response_not_found_includes_id() {
        let error = ErrorResponse::not_found("Member", "abc-123");
        assert_eq!(error.code, "NOT_FOUND");
        assert!(error.message.contains("abc-123"));
    }

    #[test]
    fn details_are_omitted_when_absent() {
        let json = serde_json::to_value(ErrorResponse::internal("boom")).unwrap();
        assert!(json.get("details").is_none());

        let json = serde_json::to_value(
            ErrorResponse::new("VALIDATION_FAILED", "bad")
                .with_details(serde_json::json!({ "field": "name" })),
        )
        .unwrap();
        assert_eq!(json["details"]["field"], "name");
    }
}
