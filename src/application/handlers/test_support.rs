//! Port mocks shared by handler tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode, MemberId};
use crate::domain::member::{Member, MemberDetails};
use crate::domain::reference::{MonthlyRegistration, TaskCategory};
use crate::ports::{MemberRepository, ReferenceDataReader};

pub(crate) struct MockMemberRepository {
    members: Mutex<Vec<Member>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MockMemberRepository {
    pub(crate) fn new() -> Self {
        Self::with_members(Vec::new())
    }

    pub(crate) fn with_members(members: Vec<Member>) -> Self {
        Self {
            members: Mutex::new(members),
            fail_reads: false,
            fail_writes: false,
        }
    }

    pub(crate) fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::new()
        }
    }

    pub(crate) fn failing_writes(members: Vec<Member>) -> Self {
        Self {
            fail_writes: true,
            ..Self::with_members(members)
        }
    }

    pub(crate) fn stored(&self) -> Vec<Member> {
        self.members.lock().unwrap().clone()
    }

    fn check(&self, fail: bool) -> Result<(), DomainError> {
        if fail {
            return Err(DomainError::new(ErrorCode::DatabaseError, "Simulated failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl MemberRepository for MockMemberRepository {
    async fn save(&self, member: &Member) -> Result<(), DomainError> {
        self.check(self.fail_writes)?;
        self.members.lock().unwrap().push(member.clone());
        Ok(())
    }

    async fn update(&self, member: &Member) -> Result<(), DomainError> {
        self.check(self.fail_writes)?;
        let mut members = self.members.lock().unwrap();
        match members.iter().position(|m| m.id() == member.id()) {
            Some(pos) => {
                members[pos] = member.clone();
                Ok(())
            }
            None => Err(not_found(member.id())),
        }
    }

    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, DomainError> {
        self.check(self.fail_reads)?;
        Ok(self.members.lock().unwrap().iter().find(|m| m.id() == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Member>, DomainError> {
        self.check(self.fail_reads)?;
        Ok(self.members.lock().unwrap().clone())
    }

    async fn delete(&self, id: &MemberId) -> Result<(), DomainError> {
        self.check(self.fail_writes)?;
        let mut members = self.members.lock().unwrap();
        let before = members.len();
        members.retain(|m| m.id() != id);
        if members.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.check(self.fail_reads)?;
        Ok(self.members.lock().unwrap().len() as u64)
    }
}

fn not_found(id: &MemberId) -> DomainError {
    DomainError::new(ErrorCode::MemberNotFound, "Member not found")
        .with_detail("member_id", id.to_string())
}

pub(crate) struct MockReferenceData {
    pub(crate) categories: Vec<TaskCategory>,
    pub(crate) series: Vec<MonthlyRegistration>,
}

impl MockReferenceData {
    pub(crate) fn quarter() -> Self {
        Self {
            categories: vec![
                TaskCategory::new("Event Planning", 25, 8),
                TaskCategory::new("Marketing", 18, 5),
            ],
            series: vec![
                MonthlyRegistration::new("Jan", 35),
                MonthlyRegistration::new("Feb", 42),
                MonthlyRegistration::new("Mar", 53),
            ],
        }
    }
}

#[async_trait]
impl ReferenceDataReader for MockReferenceData {
    async fn list_task_categories(&self) -> Result<Vec<TaskCategory>, DomainError> {
        Ok(self.categories.clone())
    }

    async fn list_monthly_registrations(&self) -> Result<Vec<MonthlyRegistration>, DomainError> {
        Ok(self.series.clone())
    }
}

pub(crate) fn details(name: &str, efficiency: i64, registrations: u32) -> MemberDetails {
    MemberDetails {
        name: name.to_string(),
        role: "Event Coordinator".to_string(),
        contact: format!("{}@committee.org", name.to_lowercase().replace(' ', ".")),
        phone: None,
        tasks_completed: 12,
        tasks_pending: 3,
        efficiency,
        registrations_brought: registrations,
        performance_history: Vec::new(),
    }
}

pub(crate) fn stored_member(name: &str, efficiency: i64, registrations: u32) -> Member {
    Member::new(MemberId::new(), details(name, efficiency, registrations)).unwrap()
}
