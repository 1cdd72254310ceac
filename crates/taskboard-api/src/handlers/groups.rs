//! Group handlers

use axum::extract::State;
use uuid::Uuid;

use taskboard_core::domain::Group;

use super::{created, ok, ApiResult, Created};
use crate::dto::{Deleted, NameRequest};
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// POST /groups
pub async fn create_group(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(payload): ApiJson<NameRequest>,
) -> Created<Group> {
    created(state.groups.create_group(&auth.user_id, &payload.name).await?)
}

/// GET /groups
pub async fn list_groups(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Vec<Group>> {
    ok(state.groups.list_groups(&auth.user_id).await?)
}

/// GET /groups/{id}
pub async fn get_group(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(group_id): ApiPath<Uuid>,
) -> ApiResult<Group> {
    ok(state.groups.get_group(&auth.user_id, &group_id).await?)
}

/// PUT /groups/{id}
pub async fn rename_group(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(group_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<NameRequest>,
) -> ApiResult<Group> {
    ok(state.groups.rename_group(&auth.user_id, &group_id, &payload.name).await?)
}

/// DELETE /groups/{id}
pub async fn delete_group(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(group_id): ApiPath<Uuid>,
) -> ApiResult<Deleted> {
    state.groups.delete_group(&auth.user_id, &group_id).await?;
    ok(Deleted { id: group_id })
}
