//! Status repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::Status;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<Status>, DomainError>;
    async fn list(&self) -> Result<Vec<Status>, DomainError>;
    /// Fails with `StatusNameAlreadyExists` when the name is taken.
    async fn create(&self, status: &Status) -> Result<Status, DomainError>;
    async fn delete(&self, id: &Uuid) -> Result<u64, DomainError>;
}
