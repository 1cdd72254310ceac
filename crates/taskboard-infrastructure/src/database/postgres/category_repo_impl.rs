// ============================================================================
// Task Board Infrastructure - PostgreSQL Category Repository
// File: crates/taskboard-infrastructure/src/database/postgres/category_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use taskboard_core::domain::Category;
use taskboard_core::error::DomainError;
use taskboard_core::repositories::CategoryRepository;

use super::{db_error, is_unique_violation};

pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: Uuid,
    project_id: Uuid,
    name: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            project_id: row.project_id,
            name: row.name,
        }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Category>, DomainError> {
        let row: Option<CategoryRow> =
            sqlx::query_as("SELECT id, project_id, name FROM categories WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("finding category", e))?;

        Ok(row.map(Into::into))
    }

    async fn find_by_name(&self, project_id: &Uuid, name: &str) -> Result<Option<Category>, DomainError> {
        let row: Option<CategoryRow> = sqlx::query_as(
            "SELECT id, project_id, name FROM categories WHERE project_id = $1 AND name = $2",
        )
        .bind(project_id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding category by name", e))?;

        Ok(row.map(Into::into))
    }

    async fn list_by_project(&self, project_id: &Uuid) -> Result<Vec<Category>, DomainError> {
        let rows: Vec<CategoryRow> = sqlx::query_as(
            "SELECT id, project_id, name FROM categories WHERE project_id = $1 ORDER BY name",
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing categories", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, category: &Category) -> Result<Category, DomainError> {
        let row: CategoryRow = sqlx::query_as(
            r#"
            INSERT INTO categories (id, project_id, name)
            VALUES ($1, $2, $3)
            RETURNING id, project_id, name
            "#,
        )
        .bind(category.id)
        .bind(category.project_id)
        .bind(&category.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::CategoryNameAlreadyExists {
                    project_id: category.project_id,
                    name: category.name.clone(),
                }
            } else {
                db_error("creating category", e)
            }
        })?;

        Ok(row.into())
    }

    async fn delete(&self, id: &Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting category", e))?;

        Ok(result.rows_affected())
    }

    async fn delete_by_project(&self, project_id: &Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM categories WHERE project_id = $1")
            .bind(project_id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting project categories", e))?;

        Ok(result.rows_affected())
    }
}
