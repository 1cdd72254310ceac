// ============================================================================
// Task Board Infrastructure - PostgreSQL Group Repository
// File: crates/taskboard-infrastructure/src/database/postgres/group_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use taskboard_core::domain::Group;
use taskboard_core::error::DomainError;
use taskboard_core::repositories::GroupRepository;

use super::db_error;

pub struct PgGroupRepository {
    pool: PgPool,
}

impl PgGroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct GroupRow {
    id: Uuid,
    name: String,
    creator_user_id: Uuid,
    created_at: DateTime<Utc>,
}

impl From<GroupRow> for Group {
    fn from(row: GroupRow) -> Self {
        Group {
            id: row.id,
            name: row.name,
            creator_user_id: row.creator_user_id,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl GroupRepository for PgGroupRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Group>, DomainError> {
        let row: Option<GroupRow> =
            sqlx::query_as("SELECT id, name, creator_user_id, created_at FROM groups WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("finding group", e))?;

        Ok(row.map(Into::into))
    }

    async fn list_by_creator(&self, user_id: &Uuid) -> Result<Vec<Group>, DomainError> {
        let rows: Vec<GroupRow> = sqlx::query_as(
            r#"
            SELECT id, name, creator_user_id, created_at
            FROM groups
            WHERE creator_user_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing groups", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count_by_creator(&self, user_id: &Uuid) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM groups WHERE creator_user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("counting groups", e))?;

        Ok(count as u64)
    }

    async fn create(&self, group: &Group) -> Result<Group, DomainError> {
        let row: GroupRow = sqlx::query_as(
            r#"
            INSERT INTO groups (id, name, creator_user_id, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, creator_user_id, created_at
            "#,
        )
        .bind(group.id)
        .bind(&group.name)
        .bind(group.creator_user_id)
        .bind(group.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("creating group", e))?;

        Ok(row.into())
    }

    async fn update(&self, group: &Group) -> Result<Group, DomainError> {
        let row: Option<GroupRow> = sqlx::query_as(
            r#"
            UPDATE groups SET name = $2
            WHERE id = $1
            RETURNING id, name, creator_user_id, created_at
            "#,
        )
        .bind(group.id)
        .bind(&group.name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("updating group", e))?;

        row.map(Into::into).ok_or(DomainError::GroupNotFound(group.id))
    }

    async fn delete(&self, id: &Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM groups WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting group", e))?;

        Ok(result.rows_affected())
    }
}
