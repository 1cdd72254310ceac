//! Work group repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::Group;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Group>, DomainError>;
    async fn list_by_creator(&self, user_id: &Uuid) -> Result<Vec<Group>, DomainError>;
    async fn count_by_creator(&self, user_id: &Uuid) -> Result<u64, DomainError>;
    async fn create(&self, group: &Group) -> Result<Group, DomainError>;
    async fn update(&self, group: &Group) -> Result<Group, DomainError>;
    async fn delete(&self, id: &Uuid) -> Result<u64, DomainError>;
}
