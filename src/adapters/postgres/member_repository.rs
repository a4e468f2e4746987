//! PostgreSQL implementation of MemberRepository.
//!
//! Members live in `committee_members`. Performance history is stored as
//! JSONB; `position` keeps snapshot reads in insertion order.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, MemberId, Percentage, Timestamp};
use crate::domain::member::{Member, MemberRole, PerformanceEntry};
use crate::ports::MemberRepository;

const SELECT_COLUMNS: &str = r#"
    SELECT id, name, role, contact, phone, tasks_completed, tasks_pending,
           efficiency, registrations_brought, performance_history,
           created_at, updated_at
    FROM committee_members
"#;

/// PostgreSQL implementation of MemberRepository.
#[derive(Clone)]
pub struct PostgresMemberRepository {
    pool: PgPool,
}

impl PostgresMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PostgresMemberRepository {
    async fn save(&self, member: &Member) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO committee_members (
                id, name, role, contact, phone, tasks_completed, tasks_pending,
                efficiency, registrations_brought, performance_history,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(member.id().as_uuid())
        .bind(member.name())
        .bind(member.role().display_name())
        .bind(member.contact())
        .bind(member.phone())
        .bind(i64::from(member.tasks_completed()))
        .bind(i64::from(member.tasks_pending()))
        .bind(i16::from(member.efficiency().value()))
        .bind(i64::from(member.registrations_brought()))
        .bind(Json(member.performance_history()))
        .bind(member.created_at().as_datetime())
        .bind(member.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert member", e))?;

        Ok(())
    }

    async fn update(&self, member: &Member) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE committee_members SET
                name = $2,
                role = $3,
                contact = $4,
                phone = $5,
                tasks_completed = $6,
                tasks_pending = $7,
                efficiency = $8,
                registrations_brought = $9,
                performance_history = $10,
                updated_at = $11
            WHERE id = $1
            "#,
        )
        .bind(member.id().as_uuid())
        .bind(member.name())
        .bind(member.role().display_name())
        .bind(member.contact())
        .bind(member.phone())
        .bind(i64::from(member.tasks_completed()))
        .bind(i64::from(member.tasks_pending()))
        .bind(i16::from(member.efficiency().value()))
        .bind(i64::from(member.registrations_brought()))
        .bind(Json(member.performance_history()))
        .bind(member.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update member", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found(member.id()));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch member", e))?;

        row.map(row_to_member).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Member>, DomainError> {
        let rows = sqlx::query(&format!("{} ORDER BY position ASC", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list members", e))?;

        rows.into_iter().map(row_to_member).collect()
    }

    async fn delete(&self, id: &MemberId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM committee_members WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete member", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM committee_members")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to count members", e))?;

        Ok(result.0.max(0) as u64)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn db_error(context: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, err))
}

fn not_found(id: &MemberId) -> DomainError {
    DomainError::new(ErrorCode::MemberNotFound, format!("Member not found: {}", id))
        .with_detail("member_id", id.to_string())
}

fn get<'r, T>(row: &'r sqlx::postgres::PgRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(column)
        .map_err(|e| db_error(&format!("Failed to get {}", column), e))
}

fn count_column(row: &sqlx::postgres::PgRow, column: &str) -> Result<u32, DomainError> {
    let value: i64 = get(row, column)?;
    u32::try_from(value).map_err(|e| db_error(&format!("Invalid {}", column), e))
}

fn row_to_member(row: sqlx::postgres::PgRow) -> Result<Member, DomainError> {
    let id: uuid::Uuid = get(&row, "id")?;
    let role: String = get(&row, "role")?;
    let role: MemberRole = role
        .parse()
        .map_err(|e| db_error("Invalid role", e))?;
    let efficiency: i16 = get(&row, "efficiency")?;
    let efficiency = Percentage::for_field("efficiency", i64::from(efficiency))
        .map_err(|e| db_error("Invalid efficiency", e))?;
    let Json(history): Json<Vec<PerformanceEntry>> = get(&row, "performance_history")?;
    let created_at: chrono::DateTime<chrono::Utc> = get(&row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = get(&row, "updated_at")?;

    Ok(Member::reconstitute(
        MemberId::from_uuid(id),
        get(&row, "name")?,
        role,
        get(&row, "contact")?,
        get(&row, "phone")?,
        count_column(&row, "tasks_completed")?,
        count_column(&row, "tasks_pending")?,
        efficiency,
        count_column(&row, "registrations_brought")?,
        history,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
