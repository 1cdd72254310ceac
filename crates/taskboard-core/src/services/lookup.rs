//! Lookup-or-create resolution of categories and statuses by name.
//!
//! Names are unique in the store; when an insert loses a race against a
//! concurrent insert of the same name, the lookup is retried once.
//! `created` is set only when this call inserted the row, so callers can
//! record its removal for rollback.

use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{Category, Status};
use crate::error::DomainError;
use crate::repositories::{CategoryRepository, StatusRepository};

#[derive(Debug)]
pub(crate) struct Resolved<T> {
    pub(crate) row: T,
    pub(crate) created: bool,
}

impl<T> Resolved<T> {
    fn existing(row: T) -> Self {
        Self { row, created: false }
    }
}

pub(crate) async fn category_by_name(
    categories: &dyn CategoryRepository,
    project_id: &Uuid,
    name: &str,
) -> Result<Resolved<Category>, DomainError> {
    let candidate = Category::new(*project_id, name.to_string())?;

    if let Some(existing) = categories.find_by_name(project_id, &candidate.name).await? {
        debug!("Reusing category '{}' ({})", existing.name, existing.id);
        return Ok(Resolved::existing(existing));
    }

    match categories.create(&candidate).await {
        Ok(created) => {
            info!("Created category '{}' in project {}", created.name, project_id);
            Ok(Resolved { row: created, created: true })
        }
        Err(DomainError::CategoryNameAlreadyExists { .. }) => categories
            .find_by_name(project_id, &candidate.name)
            .await?
            .map(Resolved::existing)
            .ok_or_else(|| {
                DomainError::InternalError(format!("category '{}' vanished after conflict", candidate.name))
            }),
        Err(e) => Err(e),
    }
}

pub(crate) async fn status_by_name(
    statuses: &dyn StatusRepository,
    name: &str,
) -> Result<Resolved<Status>, DomainError> {
    let candidate = Status::new(name.to_string())?;

    if let Some(existing) = statuses.find_by_name(&candidate.name).await? {
        debug!("Reusing status '{}' ({})", existing.name, existing.id);
        return Ok(Resolved::existing(existing));
    }

    match statuses.create(&candidate).await {
        Ok(created) => {
            info!("Created status '{}'", created.name);
            Ok(Resolved { row: created, created: true })
        }
        Err(DomainError::StatusNameAlreadyExists(_)) => statuses
            .find_by_name(&candidate.name)
            .await?
            .map(Resolved::existing)
            .ok_or_else(|| {
                DomainError::InternalError(format!("status '{}' vanished after conflict", candidate.name))
            }),
        Err(e) => Err(e),
    }
}
