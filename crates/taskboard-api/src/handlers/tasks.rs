// ============================================================================
// Task Board API - Task Handlers
// File: crates/taskboard-api/src/handlers/tasks.rs
// ============================================================================

use axum::extract::State;
use uuid::Uuid;

use taskboard_core::services::TaskWithAssignees;

use super::{created, ok, ApiResult, Created};
use crate::dto::{CreateTaskRequest, Deleted, UpdateTaskRequest};
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// POST /tasks
pub async fn create_task(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(payload): ApiJson<CreateTaskRequest>,
) -> Created<TaskWithAssignees> {
    created(state.tasks.create_task(&auth.user_id, payload.into()).await?)
}

/// GET /tasks/{project_id}
pub async fn list_tasks(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(project_id): ApiPath<Uuid>,
) -> ApiResult<Vec<TaskWithAssignees>> {
    ok(state.tasks.list_tasks(&auth.user_id, &project_id).await?)
}

/// PUT /tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(task_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateTaskRequest>,
) -> ApiResult<TaskWithAssignees> {
    ok(state.tasks.update_task(&auth.user_id, &task_id, payload.into()).await?)
}

/// DELETE /tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(task_id): ApiPath<Uuid>,
) -> ApiResult<Deleted> {
    state.tasks.delete_task(&auth.user_id, &task_id).await?;
    ok(Deleted { id: task_id })
}
