//! Administrator user management. Every handler checks the admin flag first.

use axum::extract::State;
use uuid::Uuid;

use taskboard_core::domain::User;

use super::{ok, ApiResult};
use crate::dto::{AdminUserUpdateRequest, Deleted};
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /admin/users
pub async fn list_users(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Vec<User>> {
    ok(state.users.list_users(&auth.user_id).await?)
}

/// PUT /admin/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(user_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<AdminUserUpdateRequest>,
) -> ApiResult<User> {
    ok(state.users.admin_update(&auth.user_id, &user_id, payload.into()).await?)
}

/// DELETE /admin/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(user_id): ApiPath<Uuid>,
) -> ApiResult<Deleted> {
    state.users.admin_delete(&auth.user_id, &user_id).await?;
    ok(Deleted { id: user_id })
}
