//! Explicit category management within a project

use tracing::info;
use uuid::Uuid;

use crate::domain::Category;
use crate::error::DomainError;
use crate::repositories::Repositories;
use crate::services::OwnershipResolver;

pub struct CategoryService {
    repos: Repositories,
    ownership: OwnershipResolver,
}

impl CategoryService {
    pub fn new(repos: Repositories) -> Self {
        let ownership = OwnershipResolver::new(repos.clone());
        Self { repos, ownership }
    }

    /// Unlike lookup-or-create on the task path, an existing name is a conflict here.
    pub async fn create_category(
        &self,
        requester_id: &Uuid,
        project_id: &Uuid,
        name: &str,
    ) -> Result<Category, DomainError> {
        self.ownership.project(requester_id, project_id).await?;
        let category = Category::new(*project_id, name.to_string())?;

        if self
            .repos
            .categories
            .find_by_name(project_id, &category.name)
            .await?
            .is_some()
        {
            return Err(DomainError::CategoryNameAlreadyExists {
                project_id: *project_id,
                name: category.name,
            });
        }

        let created = self.repos.categories.create(&category).await?;
        info!("Category '{}' created in project {}", created.name, project_id);
        Ok(created)
    }

    pub async fn list_categories(
        &self,
        requester_id: &Uuid,
        project_id: &Uuid,
    ) -> Result<Vec<Category>, DomainError> {
        self.ownership.project(requester_id, project_id).await?;
        self.repos.categories.list_by_project(project_id).await
    }

    pub async fn delete_category(&self, requester_id: &Uuid, category_id: &Uuid) -> Result<(), DomainError> {
        self.ownership.category(requester_id, category_id).await?;
        if self.repos.tasks.count_by_category(category_id).await? > 0 {
            return Err(DomainError::CategoryInUse(*category_id));
        }
        self.repos.categories.delete(category_id).await?;
        info!("Category {} deleted by {}", category_id, requester_id);
        Ok(())
    }
}
