// ============================================================================
// Task Board API - Data Transfer Objects
// File: crates/taskboard-api/src/dto.rs
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

use taskboard_core::domain::{Category, Group, Project, User};
use taskboard_core::services::{BootstrappedProject, NewTask, TaskPatch, UserPatch};

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
    pub user_id: Uuid,
    pub user: User,
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ProfileUpdateRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<ProfileUpdateRequest> for UserPatch {
    fn from(req: ProfileUpdateRequest) -> Self {
        UserPatch {
            name: req.name,
            email: req.email,
            password: req.password,
            is_admin: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AdminUserUpdateRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_admin: Option<bool>,
}

impl From<AdminUserUpdateRequest> for UserPatch {
    fn from(req: AdminUserUpdateRequest) -> Self {
        UserPatch {
            name: req.name,
            email: req.email,
            password: req.password,
            is_admin: req.is_admin,
        }
    }
}

// ---------------------------------------------------------------------------
// Groups, projects, categories
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct NameRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(default)]
    pub group_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct ProjectCreatedResponse {
    #[serde(flatten)]
    pub project: Project,
    pub categories: Vec<Category>,
    /// Present when a personal group was created for the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,
}

impl From<BootstrappedProject> for ProjectCreatedResponse {
    fn from(created: BootstrappedProject) -> Self {
        Self {
            project: created.project,
            categories: created.categories,
            group: created.group,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub project_id: Uuid,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ProjectQuery {
    pub project_id: Uuid,
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub project_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category_name: String,
    pub status_name: String,
    #[serde(default)]
    pub priority: Option<i32>,
    #[serde(default)]
    pub due_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "usuarios_asignados", alias = "assignee_ids")]
    pub assignee_ids: Vec<Uuid>,
}

impl From<CreateTaskRequest> for NewTask {
    fn from(req: CreateTaskRequest) -> Self {
        NewTask {
            project_id: req.project_id,
            title: req.title,
            description: req.description,
            category_name: req.category_name,
            status_name: req.status_name,
            priority: req.priority,
            due_at: req.due_at,
            assignee_ids: req.assignee_ids,
        }
    }
}

/// Unknown fields are ignored; a body with none of these yields an empty patch.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub category_name: Option<String>,
    pub status_name: Option<String>,
    pub priority: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_at: Option<Option<DateTime<Utc>>>,
    #[serde(default, rename = "usuarios_asignados", alias = "assignee_ids")]
    pub assignee_ids: Option<Vec<Uuid>>,
}

impl From<UpdateTaskRequest> for TaskPatch {
    fn from(req: UpdateTaskRequest) -> Self {
        TaskPatch {
            title: req.title,
            description: req.description,
            category_name: req.category_name,
            status_name: req.status_name,
            priority: req.priority,
            due_at: req.due_at,
            assignee_ids: req.assignee_ids,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Deleted {
    pub id: Uuid,
}
