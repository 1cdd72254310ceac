//! Profile and administrator operations on user accounts

use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::domain::User;
use crate::error::DomainError;
use crate::repositories::Repositories;
use crate::services::AuthPolicy;

#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// Only honoured for administrators.
    pub is_admin: Option<bool>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none() && self.is_admin.is_none()
    }
}

pub struct UserService {
    repos: Repositories,
    policy: AuthPolicy,
}

impl UserService {
    pub fn new(repos: Repositories, policy: AuthPolicy) -> Self {
        Self { repos, policy }
    }

    pub async fn profile(&self, requester_id: &Uuid) -> Result<User, DomainError> {
        self.repos
            .users
            .find_by_id(requester_id)
            .await?
            .ok_or(DomainError::UserNotFound(*requester_id))
    }

    pub async fn update_profile(&self, requester_id: &Uuid, patch: UserPatch) -> Result<User, DomainError> {
        let user = self.profile(requester_id).await?;
        if patch.is_admin.is_some() && !user.is_admin {
            return Err(DomainError::AdminRequired);
        }
        self.apply(user, patch).await
    }

    pub async fn require_admin(&self, requester_id: &Uuid) -> Result<User, DomainError> {
        let user = self.profile(requester_id).await?;
        if !user.is_admin {
            warn!("User {} attempted an administrator operation", requester_id);
            return Err(DomainError::AdminRequired);
        }
        Ok(user)
    }

    pub async fn list_users(&self, requester_id: &Uuid) -> Result<Vec<User>, DomainError> {
        self.require_admin(requester_id).await?;
        self.repos.users.list().await
    }

    pub async fn admin_update(
        &self,
        requester_id: &Uuid,
        user_id: &Uuid,
        patch: UserPatch,
    ) -> Result<User, DomainError> {
        self.require_admin(requester_id).await?;
        let user = self
            .repos
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(*user_id))?;
        self.apply(user, patch).await
    }

    /// Removes the account and its task assignments. Accounts that still own
    /// groups or projects are refused.
    pub async fn admin_delete(&self, requester_id: &Uuid, user_id: &Uuid) -> Result<(), DomainError> {
        self.require_admin(requester_id).await?;
        if requester_id == user_id {
            return Err(DomainError::ValidationError(
                "administrators cannot delete their own account".to_string(),
            ));
        }
        if self.repos.users.find_by_id(user_id).await?.is_none() {
            return Err(DomainError::UserNotFound(*user_id));
        }

        let owned = self.repos.projects.count_by_creator(user_id).await?
            + self.repos.groups.count_by_creator(user_id).await?;
        if owned > 0 {
            return Err(DomainError::UserInUse(*user_id));
        }

        let unassigned = self.repos.assignments.delete_by_user(user_id).await?;
        self.repos.users.delete(user_id).await?;
        info!("User {} deleted by {} ({} assignment(s) removed)", user_id, requester_id, unassigned);
        Ok(())
    }

    async fn apply(&self, mut user: User, patch: UserPatch) -> Result<User, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::EmptyUpdate);
        }

        if let Some(name) = &patch.name {
            user.rename(name);
        }
        if let Some(email) = &patch.email {
            if let Some(other) = self.repos.users.find_by_email(email).await? {
                if other.id != user.id {
                    return Err(DomainError::EmailAlreadyExists(other.email));
                }
            }
            user.change_email(email);
        }
        if let Some(password) = &patch.password {
            user.password_hash = self.policy.hash_password(password)?;
        }
        if let Some(is_admin) = patch.is_admin {
            user.is_admin = is_admin;
        }

        user.validate()?;
        let updated = self.repos.users.update(&user).await?;
        info!("User {} updated", updated.id);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::MockRepos;

    fn policy() -> AuthPolicy {
        AuthPolicy { admin_emails: vec![], min_password_length: 6 }
    }

    fn user(name: &str, admin: bool) -> User {
        User::new(name.into(), format!("{}@x.com", name.to_lowercase()), "h".into(), admin).unwrap()
    }

    #[tokio::test]
    async fn test_non_admin_cannot_list() {
        let plain = user("plain", false);
        let mut mocks = MockRepos::default();
        mocks.users.expect_find_by_id().returning(move |_| Ok(Some(plain.clone())));
        mocks.users.expect_list().never();

        let service = UserService::new(mocks.build(), policy());
        let err = service.list_users(&Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DomainError::AdminRequired));
    }

    #[tokio::test]
    async fn test_empty_profile_update_rejected() {
        let plain = user("plain", false);
        let mut mocks = MockRepos::default();
        mocks.users.expect_find_by_id().returning(move |_| Ok(Some(plain.clone())));
        mocks.users.expect_update().never();

        let service = UserService::new(mocks.build(), policy());
        let err = service.update_profile(&Uuid::new_v4(), UserPatch::default()).await.unwrap_err();
        assert!(matches!(err, DomainError::EmptyUpdate));
    }

    #[tokio::test]
    async fn test_profile_cannot_self_promote() {
        let plain = user("plain", false);
        let mut mocks = MockRepos::default();
        mocks.users.expect_find_by_id().returning(move |_| Ok(Some(plain.clone())));

        let service = UserService::new(mocks.build(), policy());
        let patch = UserPatch { is_admin: Some(true), ..Default::default() };
        let err = service.update_profile(&Uuid::new_v4(), patch).await.unwrap_err();
        assert!(matches!(err, DomainError::AdminRequired));
    }

    #[tokio::test]
    async fn test_admin_delete_refuses_owner() {
        let admin = user("admin", true);
        let admin_id = admin.id;
        let target = user("owner", false);
        let target_id = target.id;

        let mut mocks = MockRepos::default();
        mocks.users.expect_find_by_id().returning(move |id| {
            Ok(Some(if *id == admin_id { admin.clone() } else { target.clone() }))
        });
        mocks.projects.expect_count_by_creator().returning(|_| Ok(1));
        mocks.groups.expect_count_by_creator().returning(|_| Ok(1));
        mocks.users.expect_delete().never();

        let service = UserService::new(mocks.build(), policy());
        let err = service.admin_delete(&admin_id, &target_id).await.unwrap_err();
        assert!(matches!(err, DomainError::UserInUse(id) if id == target_id));
    }
}
