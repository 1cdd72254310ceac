// ============================================================================
// Task Board Infrastructure - PostgreSQL Task Repository
// File: crates/taskboard-infrastructure/src/database/postgres/task_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use taskboard_core::domain::{Task, TaskDetail};
use taskboard_core::error::DomainError;
use taskboard_core::repositories::TaskRepository;

use super::db_error;

pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TaskRow {
    id: Uuid,
    project_id: Uuid,
    category_id: Uuid,
    status_id: Uuid,
    title: String,
    description: Option<String>,
    priority: i32,
    created_at: DateTime<Utc>,
    due_at: Option<DateTime<Utc>>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: row.id,
            project_id: row.project_id,
            category_id: row.category_id,
            status_id: row.status_id,
            title: row.title,
            description: row.description,
            priority: row.priority,
            created_at: row.created_at,
            due_at: row.due_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct TaskDetailRow {
    #[sqlx(flatten)]
    task: TaskRow,
    category_name: String,
    status_name: String,
}

impl From<TaskDetailRow> for TaskDetail {
    fn from(row: TaskDetailRow) -> Self {
        TaskDetail {
            task: row.task.into(),
            category_name: row.category_name,
            status_name: row.status_name,
        }
    }
}

const TASK_COLUMNS: &str =
    "id, project_id, category_id, status_id, title, description, priority, created_at, due_at";

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Task>, DomainError> {
        let row: Option<TaskRow> =
            sqlx::query_as(&format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("finding task", e))?;

        Ok(row.map(Into::into))
    }

    async fn list_by_project(&self, project_id: &Uuid) -> Result<Vec<Task>, DomainError> {
        let rows: Vec<TaskRow> = sqlx::query_as(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE project_id = $1 ORDER BY created_at, id"
        ))
        .bind(project_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing tasks", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_details_by_project(&self, project_id: &Uuid) -> Result<Vec<TaskDetail>, DomainError> {
        let rows: Vec<TaskDetailRow> = sqlx::query_as(
            r#"
            SELECT
                t.id, t.project_id, t.category_id, t.status_id, t.title,
                t.description, t.priority, t.created_at, t.due_at,
                c.name AS category_name,
                s.name AS status_name
            FROM tasks t
            JOIN categories c ON c.id = t.category_id
            JOIN statuses s ON s.id = t.status_id
            WHERE t.project_id = $1
            ORDER BY t.created_at, t.id
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("loading board tasks", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count_by_category(&self, category_id: &Uuid) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE category_id = $1")
            .bind(category_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("counting tasks by category", e))?;

        Ok(count as u64)
    }

    async fn create(&self, task: &Task) -> Result<Task, DomainError> {
        let row: TaskRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO tasks ({TASK_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {TASK_COLUMNS}
            "#
        ))
        .bind(task.id)
        .bind(task.project_id)
        .bind(task.category_id)
        .bind(task.status_id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.priority)
        .bind(task.created_at)
        .bind(task.due_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("creating task", e))?;

        Ok(row.into())
    }

    async fn update(&self, task: &Task) -> Result<Task, DomainError> {
        let row: Option<TaskRow> = sqlx::query_as(&format!(
            r#"
            UPDATE tasks
            SET category_id = $2, status_id = $3, title = $4,
                description = $5, priority = $6, due_at = $7
            WHERE id = $1
            RETURNING {TASK_COLUMNS}
            "#
        ))
        .bind(task.id)
        .bind(task.category_id)
        .bind(task.status_id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.priority)
        .bind(task.due_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("updating task", e))?;

        row.map(Into::into).ok_or(DomainError::TaskNotFound(task.id))
    }

    async fn delete(&self, id: &Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting task", e))?;

        Ok(result.rows_affected())
    }

    async fn delete_by_project(&self, project_id: &Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM tasks WHERE project_id = $1")
            .bind(project_id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting project tasks", e))?;

        Ok(result.rows_affected())
    }
}
