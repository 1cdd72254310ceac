// ============================================================================
// Task Board Core - Task Service
// File: crates/taskboard-core/src/services/task_service.rs
// Description: Task create/update/delete with assignment management
// ============================================================================

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;
use validator::Validate;

use taskboard_shared::constants::DEFAULT_PRIORITY;

use crate::domain::{Task, TaskAssignment};
use crate::error::DomainError;
use crate::repositories::Repositories;
use crate::services::lookup;
use crate::services::rollback::{RollbackLog, Undo};
use crate::services::OwnershipResolver;

#[derive(Debug, Clone)]
pub struct NewTask {
    pub project_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category_name: String,
    pub status_name: String,
    pub priority: Option<i32>,
    pub due_at: Option<DateTime<Utc>>,
    pub assignee_ids: Vec<Uuid>,
}

/// Partial update. `Some(None)` clears an optional field.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub category_name: Option<String>,
    pub status_name: Option<String>,
    pub priority: Option<i32>,
    pub due_at: Option<Option<DateTime<Utc>>>,
    /// Replaces the whole assignment set.
    pub assignee_ids: Option<Vec<Uuid>>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category_name.is_none()
            && self.status_name.is_none()
            && self.priority.is_none()
            && self.due_at.is_none()
            && self.assignee_ids.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskWithAssignees {
    #[serde(flatten)]
    pub task: Task,
    pub assignees: Vec<Uuid>,
}

pub struct TaskService {
    repos: Repositories,
    ownership: OwnershipResolver,
}

impl TaskService {
    pub fn new(repos: Repositories) -> Self {
        let ownership = OwnershipResolver::new(repos.clone());
        Self { repos, ownership }
    }

    pub async fn create_task(
        &self,
        requester_id: &Uuid,
        new_task: NewTask,
    ) -> Result<TaskWithAssignees, DomainError> {
        let project = self.ownership.project(requester_id, &new_task.project_id).await?;

        let title = Task::check_title(&new_task.title)?;
        let priority = Task::check_priority(new_task.priority.unwrap_or(DEFAULT_PRIORITY))?;
        let assignees = self.existing_users(&new_task.assignee_ids).await?;

        let mut log = RollbackLog::new(&self.repos);
        let task = match self.insert_task(&mut log, new_task, title, priority, &assignees).await {
            Ok(task) => task,
            Err(e) => {
                error!("Creating task in project {} failed, rolling back: {}", project.id, e);
                log.rollback().await;
                return Err(e);
            }
        };

        info!(
            "Task {} created in project {} with {} assignee(s)",
            task.id,
            project.id,
            assignees.len()
        );
        Ok(TaskWithAssignees { task, assignees })
    }

    async fn insert_task(
        &self,
        log: &mut RollbackLog<'_>,
        new_task: NewTask,
        title: String,
        priority: i32,
        assignees: &[Uuid],
    ) -> Result<Task, DomainError> {
        let category_id = self.resolve_category(log, &new_task.project_id, &new_task.category_name).await?;
        let status_id = self.resolve_status(log, &new_task.status_name).await?;

        let task = Task::new(
            new_task.project_id,
            category_id,
            status_id,
            title,
            new_task.description,
            priority,
            new_task.due_at,
        )?;

        let task = self.repos.tasks.create(&task).await?;
        log.record(Undo::DeleteTask(task.id));
        log.record(Undo::DeleteTaskAssignments(task.id));

        self.assign(&task.id, assignees).await?;
        Ok(task)
    }

    pub async fn update_task(
        &self,
        requester_id: &Uuid,
        task_id: &Uuid,
        patch: TaskPatch,
    ) -> Result<TaskWithAssignees, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::EmptyUpdate);
        }

        let (mut task, _) = self.ownership.task(requester_id, task_id).await?;

        if let Some(title) = &patch.title {
            task.title = Task::check_title(title)?;
        }
        if let Some(priority) = patch.priority {
            task.priority = Task::check_priority(priority)?;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(due_at) = patch.due_at {
            task.due_at = due_at;
        }
        let replacement = match &patch.assignee_ids {
            Some(ids) => Some(self.existing_users(ids).await?),
            None => None,
        };

        let mut log = RollbackLog::new(&self.repos);
        let written = self
            .write_update(
                &mut log,
                task,
                patch.category_name.as_deref(),
                patch.status_name.as_deref(),
                replacement,
            )
            .await;
        let (task, assignees) = match written {
            Ok(written) => written,
            Err(e) => {
                error!("Updating task {} failed, rolling back: {}", task_id, e);
                log.rollback().await;
                return Err(e);
            }
        };

        info!("Task {} updated by {}", task.id, requester_id);
        Ok(TaskWithAssignees { task, assignees })
    }

    /// Assignees are replaced before the task row is written; the previous
    /// set is recorded first so either failure restores it.
    async fn write_update(
        &self,
        log: &mut RollbackLog<'_>,
        mut task: Task,
        category_name: Option<&str>,
        status_name: Option<&str>,
        replacement: Option<Vec<Uuid>>,
    ) -> Result<(Task, Vec<Uuid>), DomainError> {
        if let Some(name) = category_name {
            task.category_id = self.resolve_category(log, &task.project_id, name).await?;
        }
        if let Some(name) = status_name {
            task.status_id = self.resolve_status(log, name).await?;
        }
        task.validate()?;

        let assignees = match replacement {
            Some(user_ids) => {
                let previous = self.assignees_of(&task.id).await?;
                log.record(Undo::RestoreTaskAssignments { task_id: task.id, user_ids: previous });

                self.repos.assignments.delete_by_task(&task.id).await?;
                self.assign(&task.id, &user_ids).await?;
                user_ids
            }
            None => self.assignees_of(&task.id).await?,
        };

        let task = self.repos.tasks.update(&task).await?;
        Ok((task, assignees))
    }

    pub async fn delete_task(&self, requester_id: &Uuid, task_id: &Uuid) -> Result<(), DomainError> {
        self.ownership.task(requester_id, task_id).await?;

        self.repos.assignments.delete_by_task(task_id).await?;
        self.repos.tasks.delete(task_id).await?;

        info!("Task {} deleted by {}", task_id, requester_id);
        Ok(())
    }

    pub async fn list_tasks(
        &self,
        requester_id: &Uuid,
        project_id: &Uuid,
    ) -> Result<Vec<TaskWithAssignees>, DomainError> {
        self.ownership.project(requester_id, project_id).await?;

        let tasks = self.repos.tasks.list_by_project(project_id).await?;
        let assignments = self.repos.assignments.list_by_project(project_id).await?;

        Ok(tasks
            .into_iter()
            .map(|task| {
                let assignees = assignments
                    .iter()
                    .filter(|a| a.task_id == task.id)
                    .map(|a| a.user_id)
                    .collect();
                TaskWithAssignees { task, assignees }
            })
            .collect())
    }

    /// Deduplicates the ids (first occurrence wins) and checks every user exists.
    async fn existing_users(&self, user_ids: &[Uuid]) -> Result<Vec<Uuid>, DomainError> {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(user_ids.len());
        for id in user_ids {
            if !seen.insert(*id) {
                continue;
            }
            if self.repos.users.find_by_id(id).await?.is_none() {
                return Err(DomainError::UserNotFound(*id));
            }
            unique.push(*id);
        }
        Ok(unique)
    }

    async fn resolve_category(
        &self,
        log: &mut RollbackLog<'_>,
        project_id: &Uuid,
        name: &str,
    ) -> Result<Uuid, DomainError> {
        let resolved = lookup::category_by_name(self.repos.categories.as_ref(), project_id, name).await?;
        if resolved.created {
            log.record(Undo::DeleteCategory(resolved.row.id));
        }
        Ok(resolved.row.id)
    }

    async fn resolve_status(&self, log: &mut RollbackLog<'_>, name: &str) -> Result<Uuid, DomainError> {
        let resolved = lookup::status_by_name(self.repos.statuses.as_ref(), name).await?;
        if resolved.created {
            log.record(Undo::DeleteStatus(resolved.row.id));
        }
        Ok(resolved.row.id)
    }

    async fn assign(&self, task_id: &Uuid, user_ids: &[Uuid]) -> Result<(), DomainError> {
        for user_id in user_ids {
            self.repos
                .assignments
                .create(&TaskAssignment::new(*task_id, *user_id))
                .await?;
        }
        Ok(())
    }

    async fn assignees_of(&self, task_id: &Uuid) -> Result<Vec<Uuid>, DomainError> {
        Ok(self
            .repos
            .assignments
            .list_by_task(task_id)
            .await?
            .into_iter()
            .map(|a| a.user_id)
            .collect())
    }
}
