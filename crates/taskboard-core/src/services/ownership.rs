// ============================================================================
// Task Board Core - Ownership Resolver
// File: crates/taskboard-core/src/services/ownership.rs
// ============================================================================
//! Walks the foreign keys from a resource up to its project (or group) and
//! checks the requester is the creator. Pure reads, no side effects.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{Category, Group, Project, Task};
use crate::error::DomainError;
use crate::repositories::Repositories;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Group,
    Project,
    Category,
    Task,
}

/// An authorized resource, carrying the project it hangs from where there is one.
#[derive(Debug, Clone)]
pub enum Resource {
    Group(Group),
    Project(Project),
    Category { category: Category, project: Project },
    Task { task: Task, project: Project },
}

#[derive(Clone)]
pub struct OwnershipResolver {
    repos: Repositories,
}

impl OwnershipResolver {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    pub async fn resolve_and_authorize(
        &self,
        requester_id: &Uuid,
        kind: ResourceKind,
        resource_id: &Uuid,
    ) -> Result<Resource, DomainError> {
        match kind {
            ResourceKind::Group => self.group(requester_id, resource_id).await.map(Resource::Group),
            ResourceKind::Project => self.project(requester_id, resource_id).await.map(Resource::Project),
            ResourceKind::Category => self
                .category(requester_id, resource_id)
                .await
                .map(|(category, project)| Resource::Category { category, project }),
            ResourceKind::Task => self
                .task(requester_id, resource_id)
                .await
                .map(|(task, project)| Resource::Task { task, project }),
        }
    }

    pub async fn group(&self, requester_id: &Uuid, group_id: &Uuid) -> Result<Group, DomainError> {
        let group = self
            .repos
            .groups
            .find_by_id(group_id)
            .await?
            .ok_or(DomainError::GroupNotFound(*group_id))?;

        if !group.is_owned_by(requester_id) {
            warn!("User {} denied access to group {}", requester_id, group_id);
            return Err(DomainError::Forbidden(format!("not the owner of group {}", group_id)));
        }
        Ok(group)
    }

    pub async fn project(&self, requester_id: &Uuid, project_id: &Uuid) -> Result<Project, DomainError> {
        let project = self
            .repos
            .projects
            .find_by_id(project_id)
            .await?
            .ok_or(DomainError::ProjectNotFound(*project_id))?;

        if !project.is_owned_by(requester_id) {
            warn!("User {} denied access to project {}", requester_id, project_id);
            return Err(DomainError::Forbidden(format!("not the owner of project {}", project_id)));
        }

        debug!("User {} authorized on project {}", requester_id, project_id);
        Ok(project)
    }

    pub async fn category(
        &self,
        requester_id: &Uuid,
        category_id: &Uuid,
    ) -> Result<(Category, Project), DomainError> {
        let category = self
            .repos
            .categories
            .find_by_id(category_id)
            .await?
            .ok_or(DomainError::CategoryNotFound(*category_id))?;
        let project = self.project(requester_id, &category.project_id).await?;
        Ok((category, project))
    }

    pub async fn task(&self, requester_id: &Uuid, task_id: &Uuid) -> Result<(Task, Project), DomainError> {
        let task = self
            .repos
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(DomainError::TaskNotFound(*task_id))?;
        let project = self.project(requester_id, &task.project_id).await?;
        Ok((task, project))
    }
}
