// ============================================================================
// Task Board Infrastructure - PostgreSQL Status Repository
// File: crates/taskboard-infrastructure/src/database/postgres/status_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use taskboard_core::domain::Status;
use taskboard_core::error::DomainError;
use taskboard_core::repositories::StatusRepository;

use super::{db_error, is_unique_violation};

pub struct PgStatusRepository {
    pool: PgPool,
}

impl PgStatusRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct StatusRow {
    id: Uuid,
    name: String,
}

impl From<StatusRow> for Status {
    fn from(row: StatusRow) -> Self {
        Status { id: row.id, name: row.name }
    }
}

#[async_trait]
impl StatusRepository for PgStatusRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Status>, DomainError> {
        let row: Option<StatusRow> = sqlx::query_as("SELECT id, name FROM statuses WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("finding status", e))?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Status>, DomainError> {
        let rows: Vec<StatusRow> = sqlx::query_as("SELECT id, name FROM statuses ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("listing statuses", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, status: &Status) -> Result<Status, DomainError> {
        let row: StatusRow = sqlx::query_as(
            "INSERT INTO statuses (id, name) VALUES ($1, $2) RETURNING id, name",
        )
        .bind(status.id)
        .bind(&status.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::StatusNameAlreadyExists(status.name.clone())
            } else {
                db_error("creating status", e)
            }
        })?;

        Ok(row.into())
    }

    async fn delete(&self, id: &Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM statuses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting status", e))?;

        Ok(result.rows_affected())
    }
}
