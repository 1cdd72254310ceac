//! Category repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::Category;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Category>, DomainError>;
    /// Exact name match within one project.
    async fn find_by_name(&self, project_id: &Uuid, name: &str) -> Result<Option<Category>, DomainError>;
    async fn list_by_project(&self, project_id: &Uuid) -> Result<Vec<Category>, DomainError>;
    /// Fails with `CategoryNameAlreadyExists` when the name is taken in the project.
    async fn create(&self, category: &Category) -> Result<Category, DomainError>;
    async fn delete(&self, id: &Uuid) -> Result<u64, DomainError>;
    async fn delete_by_project(&self, project_id: &Uuid) -> Result<u64, DomainError>;
}
