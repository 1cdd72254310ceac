//! Category handlers

use axum::extract::State;
use uuid::Uuid;

use taskboard_core::domain::Category;

use super::{created, ok, ApiResult, Created};
use crate::dto::{CreateCategoryRequest, Deleted, ProjectQuery};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(payload): ApiJson<CreateCategoryRequest>,
) -> Created<Category> {
    created(
        state
            .categories
            .create_category(&auth.user_id, &payload.project_id, &payload.name)
            .await?,
    )
}

/// GET /categories?project_id=
pub async fn list_categories(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(query): ApiQuery<ProjectQuery>,
) -> ApiResult<Vec<Category>> {
    ok(state.categories.list_categories(&auth.user_id, &query.project_id).await?)
}

/// DELETE /categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(category_id): ApiPath<Uuid>,
) -> ApiResult<Deleted> {
    state.categories.delete_category(&auth.user_id, &category_id).await?;
    ok(Deleted { id: category_id })
}
