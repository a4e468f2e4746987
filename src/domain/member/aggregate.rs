//! Member aggregate entity.
//!
//! A member is one person on the committee together with their task counts,
//! efficiency score, registrations brought and monthly performance history.
//!
//! # Ownership
//!
//! Members are owned by the member store. Analytics only ever read a borrowed
//! snapshot and never write back.

use serde::Serialize;

use crate::domain::foundation::{MemberId, Percentage, Timestamp, ValidationError};

use super::performance::{PerformanceEntry, PerformanceInput};
use super::role::MemberRole;

/// Maximum length for a member name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length for a contact email.
pub const MAX_CONTACT_LENGTH: usize = 254;

/// Unvalidated member fields, as supplied by a create or replace request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberDetails {
    pub name: String,
    pub role: String,
    pub contact: String,
    pub phone: Option<String>,
    pub tasks_completed: u32,
    pub tasks_pending: u32,
    pub efficiency: i64,
    pub registrations_brought: u32,
    pub performance_history: Vec<PerformanceInput>,
}

/// Partial update: only the provided fields change.
///
/// A blank `phone` clears the phone number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberChanges {
    pub name: Option<String>,
    pub role: Option<String>,
    pub contact: Option<String>,
    pub phone: Option<String>,
    pub tasks_completed: Option<u32>,
    pub tasks_pending: Option<u32>,
    pub efficiency: Option<i64>,
    pub registrations_brought: Option<u32>,
    pub performance_history: Option<Vec<PerformanceInput>>,
}

impl MemberChanges {
    /// Returns true when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == MemberChanges::default()
    }
}

/// Member aggregate.
///
/// # Invariants
///
/// - `id` is unique and never changes
/// - `name` is 1-100 characters, `contact` is email-shaped
/// - `total_tasks == tasks_completed + tasks_pending`
/// - `performance_history` only ever grows at the end
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    id: MemberId,
    name: String,
    role: MemberRole,
    contact: String,
    phone: Option<String>,
    tasks_completed: u32,
    tasks_pending: u32,
    total_tasks: u32,
    efficiency: Percentage,
    registrations_brought: u32,
    performance_history: Vec<PerformanceEntry>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

struct ValidatedDetails {
    name: String,
    role: MemberRole,
    contact: String,
    phone: Option<String>,
    tasks_completed: u32,
    tasks_pending: u32,
    total_tasks: u32,
    efficiency: Percentage,
    registrations_brought: u32,
    performance_history: Vec<PerformanceEntry>,
}

impl Member {
    /// Create a new member.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn new(id: MemberId, details: MemberDetails) -> Result<Self, ValidationError> {
        let valid = validate(details)?;
        let now = Timestamp::now();
        Ok(Self {
            id,
            name: valid.name,
            role: valid.role,
            contact: valid.contact,
            phone: valid.phone,
            tasks_completed: valid.tasks_completed,
            tasks_pending: valid.tasks_pending,
            total_tasks: valid.total_tasks,
            efficiency: valid.efficiency,
            registrations_brought: valid.registrations_brought,
            performance_history: valid.performance_history,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a member from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: MemberId,
        name: String,
        role: MemberRole,
        contact: String,
        phone: Option<String>,
        tasks_completed: u32,
        tasks_pending: u32,
        efficiency: Percentage,
        registrations_brought: u32,
        performance_history: Vec<PerformanceEntry>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            role,
            contact,
            phone,
            tasks_completed,
            tasks_pending,
            total_tasks: tasks_completed.saturating_add(tasks_pending),
            efficiency,
            registrations_brought,
            performance_history,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &MemberId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> MemberRole {
        self.role
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn tasks_completed(&self) -> u32 {
        self.tasks_completed
    }

    pub fn tasks_pending(&self) -> u32 {
        self.tasks_pending
    }

    /// Completed plus pending.
    pub fn total_tasks(&self) -> u32 {
        self.total_tasks
    }

    pub fn efficiency(&self) -> Percentage {
        self.efficiency
    }

    pub fn registrations_brought(&self) -> u32 {
        self.registrations_brought
    }

    pub fn performance_history(&self) -> &[PerformanceEntry] {
        &self.performance_history
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace every editable field. Id and creation time are kept.
    ///
    /// # Errors
    ///
    /// - any field validation failure
    /// - `performance_history` if the new history rewrites existing entries
    pub fn replace(&mut self, details: MemberDetails) -> Result<(), ValidationError> {
        let valid = validate(details)?;
        if !valid.performance_history.starts_with(&self.performance_history) {
            return Err(ValidationError::invalid_format(
                "performanceHistory",
                "existing entries cannot be changed or removed",
            ));
        }

        self.name = valid.name;
        self.role = valid.role;
        self.contact = valid.contact;
        self.phone = valid.phone;
        self.tasks_completed = valid.tasks_completed;
        self.tasks_pending = valid.tasks_pending;
        self.total_tasks = valid.total_tasks;
        self.efficiency = valid.efficiency;
        self.registrations_brought = valid.registrations_brought;
        self.performance_history = valid.performance_history;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Apply a partial update on top of the current state.
    pub fn apply(&mut self, changes: MemberChanges) -> Result<(), ValidationError> {
        let mut details = self.to_details();
        if let Some(name) = changes.name {
            details.name = name;
        }
        if let Some(role) = changes.role {
            details.role = role;
        }
        if let Some(contact) = changes.contact {
            details.contact = contact;
        }
        if let Some(phone) = changes.phone {
            details.phone = Some(phone);
        }
        if let Some(completed) = changes.tasks_completed {
            details.tasks_completed = completed;
        }
        if let Some(pending) = changes.tasks_pending {
            details.tasks_pending = pending;
        }
        if let Some(efficiency) = changes.efficiency {
            details.efficiency = efficiency;
        }
        if let Some(registrations) = changes.registrations_brought {
            details.registrations_brought = registrations;
        }
        if let Some(history) = changes.performance_history {
            details.performance_history = history;
        }
        self.replace(details)
    }

    /// Append one month to the performance history.
    pub fn record_performance(
        &mut self,
        month: impl Into<String>,
        score: i64,
    ) -> Result<(), ValidationError> {
        let entry = PerformanceEntry::new(month, score)?;
        self.performance_history.push(entry);
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Current state as unvalidated input, for read-modify-write updates.
    pub fn to_details(&self) -> MemberDetails {
        MemberDetails {
            name: self.name.clone(),
            role: self.role.display_name().to_string(),
            contact: self.contact.clone(),
            phone: self.phone.clone(),
            tasks_completed: self.tasks_completed,
            tasks_pending: self.tasks_pending,
            efficiency: i64::from(self.efficiency.value()),
            registrations_brought: self.registrations_brought,
            performance_history: self.performance_history.iter().map(Into::into).collect(),
        }
    }

    /// Case-insensitive substring match against name or role.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term)
            || self.role.display_name().to_lowercase().contains(&term)
    }
}

fn validate(details: MemberDetails) -> Result<ValidatedDetails, ValidationError> {
    let name = details.name.trim().to_string();
    if name.is_empty() {
        return Err(ValidationError::empty_field("name"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::invalid_format(
            "name",
            format!("must be at most {} characters", MAX_NAME_LENGTH),
        ));
    }

    let role: MemberRole = details.role.parse()?;

    let contact = details.contact.trim().to_string();
    validate_contact(&contact)?;

    let phone = details
        .phone
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty());

    let total_tasks = details
        .tasks_completed
        .checked_add(details.tasks_pending)
        .ok_or_else(|| {
            ValidationError::out_of_range(
                "totalTasks",
                0,
                i64::from(u32::MAX),
                i64::from(details.tasks_completed) + i64::from(details.tasks_pending),
            )
        })?;

    let efficiency = Percentage::for_field("efficiency", details.efficiency)?;

    let performance_history = details
        .performance_history
        .into_iter()
        .map(|input| PerformanceEntry::new(input.month, input.score))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ValidatedDetails {
        name,
        role,
        contact,
        phone,
        tasks_completed: details.tasks_completed,
        tasks_pending: details.tasks_pending,
        total_tasks,
        efficiency,
        registrations_brought: details.registrations_brought,
        performance_history,
    })
}

fn validate_contact(contact: &str) -> Result<(), ValidationError> {
    if contact.is_empty() {
        return Err(ValidationError::empty_field("contact"));
    }
    if contact.len() > MAX_CONTACT_LENGTH {
        return Err(ValidationError::invalid_format("contact", "too long"));
    }
    if contact.chars().any(char::is_whitespace) {
        return Err(ValidationError::invalid_format(
            "contact",
            "must not contain whitespace",
        ));
    }
    let (local, domain) = contact
        .split_once('@')
        .ok_or_else(|| ValidationError::invalid_format("contact", "missing @ symbol"))?;
    if local.is_empty() || domain.contains('@') {
        return Err(ValidationError::invalid_format(
            "contact",
            "must look like name@example.com",
        ));
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(ValidationError::invalid_format(
            "contact",
            "domain must contain a dot",
        )),
    }
}
