//! Task repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::{Task, TaskDetail};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Task>, DomainError>;
    /// Ordered by creation time.
    async fn list_by_project(&self, project_id: &Uuid) -> Result<Vec<Task>, DomainError>;
    /// Tasks joined with their category and status names, ordered by creation time.
    async fn list_details_by_project(&self, project_id: &Uuid) -> Result<Vec<TaskDetail>, DomainError>;
    async fn count_by_category(&self, category_id: &Uuid) -> Result<u64, DomainError>;
    async fn create(&self, task: &Task) -> Result<Task, DomainError>;
    async fn update(&self, task: &Task) -> Result<Task, DomainError>;
    async fn delete(&self, id: &Uuid) -> Result<u64, DomainError>;
    async fn delete_by_project(&self, project_id: &Uuid) -> Result<u64, DomainError>;
}
