// ============================================================================
// Task Board Core - Project Service
// File: crates/taskboard-core/src/services/project_service.rs
// Description: Project bootstrap (project + default categories) and upkeep
// ============================================================================

use tracing::{error, info};
use uuid::Uuid;
use validator::Validate;

use taskboard_shared::constants::DEFAULT_CATEGORIES;

use crate::domain::{Category, Group, Project};
use crate::error::DomainError;
use crate::repositories::Repositories;
use crate::services::rollback::{RollbackLog, Undo};
use crate::services::OwnershipResolver;

/// A freshly created project with its default categories.
#[derive(Debug, Clone)]
pub struct BootstrappedProject {
    pub project: Project,
    pub categories: Vec<Category>,
    /// Personal group created for the project when none was supplied.
    pub group: Option<Group>,
}

pub struct ProjectService {
    repos: Repositories,
    ownership: OwnershipResolver,
}

impl ProjectService {
    pub fn new(repos: Repositories) -> Self {
        let ownership = OwnershipResolver::new(repos.clone());
        Self { repos, ownership }
    }

    /// Creates the project and its four default categories, all or nothing.
    pub async fn create_project(
        &self,
        requester_id: &Uuid,
        name: &str,
        group_id: Option<Uuid>,
    ) -> Result<BootstrappedProject, DomainError> {
        let draft = Project::new(group_id.unwrap_or_else(Uuid::nil), name.to_string(), *requester_id)?;
        if let Some(group_id) = group_id {
            self.ownership.group(requester_id, &group_id).await?;
        }

        let mut log = RollbackLog::new(&self.repos);
        match self.bootstrap(&mut log, draft, group_id.is_none()).await {
            Ok(created) => {
                info!(
                    "Project {} created by {} with {} categories",
                    created.project.id,
                    requester_id,
                    created.categories.len()
                );
                Ok(created)
            }
            Err(e) => {
                error!("Project bootstrap failed, rolling back: {}", e);
                log.rollback().await;
                Err(e)
            }
        }
    }

    async fn bootstrap(
        &self,
        log: &mut RollbackLog<'_>,
        mut project: Project,
        personal_group: bool,
    ) -> Result<BootstrappedProject, DomainError> {
        let group = if personal_group {
            let group = self
                .repos
                .groups
                .create(&Group::new(project.name.clone(), project.creator_user_id)?)
                .await?;
            log.record(Undo::DeleteGroup(group.id));
            project.group_id = group.id;
            Some(group)
        } else {
            None
        };

        let project = self.repos.projects.create(&project).await?;
        log.record(Undo::DeleteProject(project.id));

        let mut categories = Vec::with_capacity(DEFAULT_CATEGORIES.len());
        for name in DEFAULT_CATEGORIES {
            let category = self
                .repos
                .categories
                .create(&Category::new(project.id, name.to_string())?)
                .await?;
            log.record(Undo::DeleteCategory(category.id));
            categories.push(category);
        }

        Ok(BootstrappedProject { project, categories, group })
    }

    pub async fn list_projects(&self, requester_id: &Uuid) -> Result<Vec<Project>, DomainError> {
        self.repos.projects.list_by_creator(requester_id).await
    }

    pub async fn get_project(&self, requester_id: &Uuid, project_id: &Uuid) -> Result<Project, DomainError> {
        self.ownership.project(requester_id, project_id).await
    }

    pub async fn rename_project(
        &self,
        requester_id: &Uuid,
        project_id: &Uuid,
        name: &str,
    ) -> Result<Project, DomainError> {
        let mut project = self.ownership.project(requester_id, project_id).await?;
        project.name = name.trim().to_string();
        project.validate()?;
        self.repos.projects.update(&project).await
    }

    /// Deletes the project together with its assignments, tasks and categories.
    pub async fn delete_project(&self, requester_id: &Uuid, project_id: &Uuid) -> Result<(), DomainError> {
        self.ownership.project(requester_id, project_id).await?;

        let assignments = self.repos.assignments.delete_by_project(project_id).await?;
        let tasks = self.repos.tasks.delete_by_project(project_id).await?;
        let categories = self.repos.categories.delete_by_project(project_id).await?;
        self.repos.projects.delete(project_id).await?;

        info!(
            "Project {} deleted by {} ({} tasks, {} assignments, {} categories)",
            project_id, requester_id, tasks, assignments, categories
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use crate::services::test_support::MockRepos;

    #[tokio::test]
    async fn test_bootstrap_creates_default_categories_in_order() {
        let owner = Uuid::new_v4();
        let mut mocks = MockRepos::default();
        mocks.groups.expect_create().times(1).returning(|g| Ok(g.clone()));
        mocks.projects.expect_create().times(1).returning(|p| Ok(p.clone()));
        mocks.categories.expect_create().times(4).returning(|c| Ok(c.clone()));

        let service = ProjectService::new(mocks.build());
        let created = service.create_project(&owner, "Roadmap", None).await.unwrap();

        let names: Vec<_> = created.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["To Do", "In Progress", "Hot Fix", "Done"]);
        assert!(created.categories.iter().all(|c| c.project_id == created.project.id));
        let group = created.group.unwrap();
        assert_eq!(group.name, "Roadmap");
        assert_eq!(created.project.group_id, group.id);
        assert_eq!(created.project.creator_user_id, owner);
    }

    #[tokio::test]
    async fn test_category_failure_rolls_back_everything() {
        let deleted_categories = Arc::new(Mutex::new(Vec::new()));
        let mut inserted = 0;

        let mut mocks = MockRepos::default();
        mocks.groups.expect_create().returning(|g| Ok(g.clone()));
        mocks.projects.expect_create().returning(|p| Ok(p.clone()));
        mocks.categories.expect_create().times(3).returning(move |c| {
            inserted += 1;
            if inserted == 3 {
                Err(DomainError::DatabaseError("connection reset".into()))
            } else {
                Ok(c.clone())
            }
        });
        let sink = deleted_categories.clone();
        mocks.categories.expect_delete().times(2).returning(move |id| {
            sink.lock().unwrap().push(*id);
            Ok(1)
        });
        mocks.projects.expect_delete().times(1).returning(|_| Ok(1));
        mocks.groups.expect_delete().times(1).returning(|_| Ok(1));

        let service = ProjectService::new(mocks.build());
        let err = service
            .create_project(&Uuid::new_v4(), "Roadmap", None)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::DatabaseError(_)));
        assert_eq!(deleted_categories.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_name_touches_nothing() {
        let mut mocks = MockRepos::default();
        mocks.groups.expect_create().never();
        mocks.projects.expect_create().never();

        let service = ProjectService::new(mocks.build());
        for name in ["", " ", "R"] {
            let err = service.create_project(&Uuid::new_v4(), name, None).await.unwrap_err();
            assert!(matches!(err, DomainError::ValidationError(_)));
        }
    }

    #[tokio::test]
    async fn test_foreign_group_is_forbidden() {
        let group = Group::new("Someone else".into(), Uuid::new_v4()).unwrap();
        let group_id = group.id;

        let mut mocks = MockRepos::default();
        mocks.groups.expect_find_by_id().returning(move |_| Ok(Some(group.clone())));
        mocks.projects.expect_create().never();

        let service = ProjectService::new(mocks.build());
        let err = service
            .create_project(&Uuid::new_v4(), "Roadmap", Some(group_id))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
    }
}
