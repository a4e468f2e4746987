//! HTTP DTOs for member endpoints.
//!
//! Counts arrive as signed integers so that negative values are reported as
//! field validation failures rather than body parse failures.

use serde::{Deserialize, Serialize};

use crate::domain::member::{MemberChanges, MemberDetails, MemberError, PerformanceInput};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One month of performance history.
#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceEntryRequest {
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub score: i64,
}

/// Full member record, used for create (POST) and replace (PUT).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub tasks_completed: i64,
    #[serde(default)]
    pub tasks_pending: i64,
    #[serde(default)]
    pub efficiency: i64,
    #[serde(default)]
    pub registrations_brought: i64,
    #[serde(default)]
    pub performance_history: Vec<PerformanceEntryRequest>,
}

/// Partial member record (PATCH). Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPatchRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    pub contact: Option<String>,
    pub phone: Option<String>,
    pub tasks_completed: Option<i64>,
    pub tasks_pending: Option<i64>,
    pub efficiency: Option<i64>,
    pub registrations_brought: Option<i64>,
    pub performance_history: Option<Vec<PerformanceEntryRequest>>,
}

/// Request to append a monthly score.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPerformanceRequest {
    #[serde(default)]
    pub month: String,
    pub score: i64,
}

/// Query parameters for listing members.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMembersParams {
    #[serde(default)]
    pub search: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Liveness message for `GET /api/`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub message: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Conversions
// ════════════════════════════════════════════════════════════════════════════

fn count(field: &str, value: i64) -> Result<u32, MemberError> {
    u32::try_from(value).map_err(|_| {
        MemberError::validation(field, format!("must be between 0 and {}", u32::MAX))
    })
}

fn history(entries: Vec<PerformanceEntryRequest>) -> Vec<PerformanceInput> {
    entries
        .into_iter()
        .map(|e| PerformanceInput::new(e.month, e.score))
        .collect()
}

impl TryFrom<MemberRequest> for MemberDetails {
    type Error = MemberError;

    fn try_from(req: MemberRequest) -> Result<Self, Self::Error> {
        Ok(MemberDetails {
            name: req.name,
            role: req.role,
            contact: req.contact,
            phone: req.phone,
            tasks_completed: count("tasksCompleted", req.tasks_completed)?,
            tasks_pending: count("tasksPending", req.tasks_pending)?,
            efficiency: req.efficiency,
            registrations_brought: count("registrationsBrought", req.registrations_brought)?,
            performance_history: history(req.performance_history),
        })
    }
}

impl TryFrom<MemberPatchRequest> for MemberChanges {
    type Error = MemberError;

    fn try_from(req: MemberPatchRequest) -> Result<Self, Self::Error> {
        Ok(MemberChanges {
            name: req.name,
            role: req.role,
            contact: req.contact,
            phone: req.phone,
            tasks_completed: req
                .tasks_completed
                .map(|v| count("tasksCompleted", v))
                .transpose()?,
            tasks_pending: req
                .tasks_pending
                .map(|v| count("tasksPending", v))
                .transpose()?,
            efficiency: req.efficiency,
            registrations_brought: req
                .registrations_brought
                .map(|v| count("registrationsBrought", v))
                .transpose()?,
            performance_history: req.performance_history.map(history),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_request_deserializes_camel_case() {
        let json = r#"{
            "name": "Sarah Johnson",
            "role": "Team Lead",
            "contact": "sarah.johnson@email.com",
            "tasksCompleted": 15,
            "tasksPending": 3,
            "efficiency": 85,
            "registrationsBrought": 12,
            "performanceHistory": [{ "month": "Jan", "score": 78 }]
        }"#;
        let req: MemberRequest = serde_json::from_str(json).unwrap();
        let details = MemberDetails::try_from(req).unwrap();

        assert_eq!(details.tasks_completed, 15);
        assert_eq!(details.registrations_brought, 12);
        assert_eq!(details.performance_history, vec![PerformanceInput::new("Jan", 78)]);
        assert!(details.phone.is_none());
    }

    #[test]
    fn missing_fields_default_for_validation() {
        let req: MemberRequest = serde_json::from_str("{}").unwrap();
        let details = MemberDetails::try_from(req).unwrap();
        assert!(details.name.is_empty());
        assert_eq!(details.efficiency, 0);
    }

    #[test]
    fn negative_count_is_validation_failure() {
        let req = MemberRequest {
            tasks_pending: -2,
            ..Default::default()
        };
        let err = MemberDetails::try_from(req).unwrap_err();
        assert!(matches!(
            err,
            MemberError::ValidationFailed { ref field, .. } if field == "tasksPending"
        ));
    }

    #[test]
    fn patch_keeps_absent_fields_absent() {
        let req: MemberPatchRequest =
            serde_json::from_str(r#"{ "efficiency": 91, "registrationsBrought": 4 }"#).unwrap();
        let changes = MemberChanges::try_from(req).unwrap();

        assert_eq!(changes.efficiency, Some(91));
        assert_eq!(changes.registrations_brought, Some(4));
        assert!(changes.name.is_none());
        assert!(changes.performance_history.is_none());
    }

    #[test]
    fn patch_rejects_negative_registrations() {
        let req = MemberPatchRequest {
            registrations_brought: Some(-1),
            ..Default::default()
        };
        assert!(MemberChanges::try_from(req).is_err());
    }
}
