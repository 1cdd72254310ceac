// ============================================================================
// Task Board API - Project Handlers
// File: crates/taskboard-api/src/handlers/projects.rs
// ============================================================================

use axum::extract::State;
use uuid::Uuid;

use taskboard_core::domain::Project;

use super::{created, ok, ApiResult, Created};
use crate::dto::{CreateProjectRequest, Deleted, NameRequest, ProjectCreatedResponse};
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// POST /projects
///
/// Creates the project with its four default categories. Without a
/// `group_id` a personal group named after the project is created too.
pub async fn create_project(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(payload): ApiJson<CreateProjectRequest>,
) -> Created<ProjectCreatedResponse> {
    let bootstrapped = state
        .projects
        .create_project(&auth.user_id, &payload.name, payload.group_id)
        .await?;
    created(bootstrapped.into())
}

/// GET /projects
pub async fn list_projects(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Vec<Project>> {
    ok(state.projects.list_projects(&auth.user_id).await?)
}

/// GET /projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(project_id): ApiPath<Uuid>,
) -> ApiResult<Project> {
    ok(state.projects.get_project(&auth.user_id, &project_id).await?)
}

/// PUT /projects/{id}
pub async fn rename_project(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(project_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<NameRequest>,
) -> ApiResult<Project> {
    ok(state
        .projects
        .rename_project(&auth.user_id, &project_id, &payload.name)
        .await?)
}

/// DELETE /projects/{id}
pub async fn delete_project(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(project_id): ApiPath<Uuid>,
) -> ApiResult<Deleted> {
    state.projects.delete_project(&auth.user_id, &project_id).await?;
    ok(Deleted { id: project_id })
}
