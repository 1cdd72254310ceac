//! Work group operations

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::domain::Group;
use crate::error::DomainError;
use crate::repositories::Repositories;
use crate::services::OwnershipResolver;

pub struct GroupService {
    repos: Repositories,
    ownership: OwnershipResolver,
}

impl GroupService {
    pub fn new(repos: Repositories) -> Self {
        let ownership = OwnershipResolver::new(repos.clone());
        Self { repos, ownership }
    }

    pub async fn create_group(&self, requester_id: &Uuid, name: &str) -> Result<Group, DomainError> {
        let group = Group::new(name.to_string(), *requester_id)?;
        let created = self.repos.groups.create(&group).await?;
        info!("Group {} created by {}", created.id, requester_id);
        Ok(created)
    }

    pub async fn list_groups(&self, requester_id: &Uuid) -> Result<Vec<Group>, DomainError> {
        self.repos.groups.list_by_creator(requester_id).await
    }

    pub async fn get_group(&self, requester_id: &Uuid, group_id: &Uuid) -> Result<Group, DomainError> {
        self.ownership.group(requester_id, group_id).await
    }

    pub async fn rename_group(
        &self,
        requester_id: &Uuid,
        group_id: &Uuid,
        name: &str,
    ) -> Result<Group, DomainError> {
        let mut group = self.ownership.group(requester_id, group_id).await?;
        group.name = name.trim().to_string();
        group.validate()?;
        self.repos.groups.update(&group).await
    }

    pub async fn delete_group(&self, requester_id: &Uuid, group_id: &Uuid) -> Result<(), DomainError> {
        self.ownership.group(requester_id, group_id).await?;
        if self.repos.projects.count_by_group(group_id).await? > 0 {
            return Err(DomainError::GroupInUse(*group_id));
        }
        self.repos.groups.delete(group_id).await?;
        info!("Group {} deleted by {}", group_id, requester_id);
        Ok(())
    }
}
