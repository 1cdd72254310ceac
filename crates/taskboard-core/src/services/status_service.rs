//! Status catalogue

use crate::domain::Status;
use crate::error::DomainError;
use crate::repositories::Repositories;

pub struct StatusService {
    repos: Repositories,
}

impl StatusService {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    pub async fn list_statuses(&self) -> Result<Vec<Status>, DomainError> {
        self.repos.statuses.list().await
    }
}
