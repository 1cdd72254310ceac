// ============================================================================
// Task Board Infrastructure - PostgreSQL Project Repository
// File: crates/taskboard-infrastructure/src/database/postgres/project_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use taskboard_core::domain::Project;
use taskboard_core::error::DomainError;
use taskboard_core::repositories::ProjectRepository;

use super::db_error;

pub struct PgProjectRepository {
    pool: PgPool,
}

impl PgProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProjectRow {
    id: Uuid,
    group_id: Uuid,
    name: String,
    creator_user_id: Uuid,
    created_at: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            group_id: row.group_id,
            name: row.name,
            creator_user_id: row.creator_user_id,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Project>, DomainError> {
        let row: Option<ProjectRow> = sqlx::query_as(
            "SELECT id, group_id, name, creator_user_id, created_at FROM projects WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding project", e))?;

        Ok(row.map(Into::into))
    }

    async fn list_by_creator(&self, user_id: &Uuid) -> Result<Vec<Project>, DomainError> {
        let rows: Vec<ProjectRow> = sqlx::query_as(
            r#"
            SELECT id, group_id, name, creator_user_id, created_at
            FROM projects
            WHERE creator_user_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing projects", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count_by_creator(&self, user_id: &Uuid) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE creator_user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("counting projects by creator", e))?;

        Ok(count as u64)
    }

    async fn count_by_group(&self, group_id: &Uuid) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE group_id = $1")
            .bind(group_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("counting projects by group", e))?;

        Ok(count as u64)
    }

    async fn create(&self, project: &Project) -> Result<Project, DomainError> {
        let row: ProjectRow = sqlx::query_as(
            r#"
            INSERT INTO projects (id, group_id, name, creator_user_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, group_id, name, creator_user_id, created_at
            "#,
        )
        .bind(project.id)
        .bind(project.group_id)
        .bind(&project.name)
        .bind(project.creator_user_id)
        .bind(project.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("creating project", e))?;

        Ok(row.into())
    }

    async fn update(&self, project: &Project) -> Result<Project, DomainError> {
        let row: Option<ProjectRow> = sqlx::query_as(
            r#"
            UPDATE projects SET name = $2
            WHERE id = $1
            RETURNING id, group_id, name, creator_user_id, created_at
            "#,
        )
        .bind(project.id)
        .bind(&project.name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("updating project", e))?;

        row.map(Into::into).ok_or(DomainError::ProjectNotFound(project.id))
    }

    async fn delete(&self, id: &Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting project", e))?;

        Ok(result.rows_affected())
    }
}
