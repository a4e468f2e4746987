//! Member-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, MemberId, ValidationError};

/// Member-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemberError {
    /// Member was not found.
    #[error("Member not found: {0}")]
    NotFound(MemberId),

    /// Validation failed at the write boundary.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl MemberError {
    pub fn not_found(id: MemberId) -> Self {
        MemberError::NotFound(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MemberError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        MemberError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            MemberError::NotFound(_) => ErrorCode::MemberNotFound,
            MemberError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            MemberError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<ValidationError> for MemberError {
    fn from(err: ValidationError) -> Self {
        MemberError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for MemberError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::MemberNotFound => match err
                .details
                .get("member_id")
                .and_then(|id| id.parse::<MemberId>().ok())
            {
                Some(id) => MemberError::NotFound(id),
                None => MemberError::Infrastructure(err.to_string()),
            },
            ErrorCode::ValidationFailed => MemberError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => MemberError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_keeps_field_name() {
        let err: MemberError = ValidationError::empty_field("contact").into();
        assert_eq!(
            err,
            MemberError::validation("contact", "Field 'contact' cannot be empty")
        );
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn not_found_domain_error_maps_back_to_id() {
        let id = MemberId::new();
        let err = DomainError::new(ErrorCode::MemberNotFound, "gone")
            .with_detail("member_id", id.to_string());
        assert_eq!(MemberError::from(err), MemberError::NotFound(id));
    }

    #[test]
    fn database_error_maps_to_infrastructure() {
        let err = DomainError::new(ErrorCode::DatabaseError, "connection reset");
        assert!(matches!(
            MemberError::from(err),
            MemberError::Infrastructure(msg) if msg.contains("connection reset")
        ));
    }

    #[test]
    fn displays_not_found_with_id() {
        let id = MemberId::new();
        assert_eq!(
            MemberError::not_found(id).to_string(),
            format!("Member not found: {}", id)
        );
    }
}
