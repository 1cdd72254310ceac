//! Project repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::Project;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Project>, DomainError>;
    async fn list_by_creator(&self, user_id: &Uuid) -> Result<Vec<Project>, DomainError>;
    async fn count_by_creator(&self, user_id: &Uuid) -> Result<u64, DomainError>;
    async fn count_by_group(&self, group_id: &Uuid) -> Result<u64, DomainError>;
    async fn create(&self, project: &Project) -> Result<Project, DomainError>;
    async fn update(&self, project: &Project) -> Result<Project, DomainError>;
    async fn delete(&self, id: &Uuid) -> Result<u64, DomainError>;
}
