//! Task assignment repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::TaskAssignment;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    async fn create(&self, assignment: &TaskAssignment) -> Result<TaskAssignment, DomainError>;
    async fn list_by_task(&self, task_id: &Uuid) -> Result<Vec<TaskAssignment>, DomainError>;
    /// Assignments of every task in the project.
    async fn list_by_project(&self, project_id: &Uuid) -> Result<Vec<TaskAssignment>, DomainError>;
    async fn delete_by_task(&self, task_id: &Uuid) -> Result<u64, DomainError>;
    async fn delete_by_user(&self, user_id: &Uuid) -> Result<u64, DomainError>;
    async fn delete_by_project(&self, project_id: &Uuid) -> Result<u64, DomainError>;
}
