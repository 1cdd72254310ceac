// ============================================================================
// Task Board Infrastructure - PostgreSQL Assignment Repository
// File: crates/taskboard-infrastructure/src/database/postgres/assignment_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use taskboard_core::domain::TaskAssignment;
use taskboard_core::error::DomainError;
use taskboard_core::repositories::AssignmentRepository;

use super::db_error;

pub struct PgAssignmentRepository {
    pool: PgPool,
}

impl PgAssignmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AssignmentRow {
    task_id: Uuid,
    user_id: Uuid,
}

impl From<AssignmentRow> for TaskAssignment {
    fn from(row: AssignmentRow) -> Self {
        TaskAssignment::new(row.task_id, row.user_id)
    }
}

#[async_trait]
impl AssignmentRepository for PgAssignmentRepository {
    async fn create(&self, assignment: &TaskAssignment) -> Result<TaskAssignment, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO tasks_users (task_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (task_id, user_id) DO NOTHING
            "#,
        )
        .bind(assignment.task_id)
        .bind(assignment.user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("assigning task", e))?;

        Ok(*assignment)
    }

    async fn list_by_task(&self, task_id: &Uuid) -> Result<Vec<TaskAssignment>, DomainError> {
        let rows: Vec<AssignmentRow> =
            sqlx::query_as("SELECT task_id, user_id FROM tasks_users WHERE task_id = $1")
                .bind(task_id)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| db_error("listing task assignees", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_project(&self, project_id: &Uuid) -> Result<Vec<TaskAssignment>, DomainError> {
        let rows: Vec<AssignmentRow> = sqlx::query_as(
            r#"
            SELECT tu.task_id, tu.user_id
            FROM tasks_users tu
            JOIN tasks t ON t.id = tu.task_id
            WHERE t.project_id = $1
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing project assignments", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_by_task(&self, task_id: &Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM tasks_users WHERE task_id = $1")
            .bind(task_id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("clearing task assignees", e))?;

        Ok(result.rows_affected())
    }

    async fn delete_by_user(&self, user_id: &Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM tasks_users WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("clearing user assignments", e))?;

        Ok(result.rows_affected())
    }

    async fn delete_by_project(&self, project_id: &Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query(
            "DELETE FROM tasks_users WHERE task_id IN (SELECT id FROM tasks WHERE project_id = $1)",
        )
        .bind(project_id)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("clearing project assignments", e))?;

        Ok(result.rows_affected())
    }
}
