//! Domain errors

use thiserror::Error;
use uuid::Uuid;

/// Coarse classification every [`DomainError`] falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Forbidden,
    Unauthorized,
    Conflict,
    Internal,
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("No updatable field supplied")]
    EmptyUpdate,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Group not found: {0}")]
    GroupNotFound(Uuid),

    #[error("Project not found: {0}")]
    ProjectNotFound(Uuid),

    #[error("Category not found: {0}")]
    CategoryNotFound(Uuid),

    #[error("Task not found: {0}")]
    TaskNotFound(Uuid),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Administrator access required")]
    AdminRequired,

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Category name already exists in project {project_id}: {name}")]
    CategoryNameAlreadyExists { project_id: Uuid, name: String },

    #[error("Status name already exists: {0}")]
    StatusNameAlreadyExists(String),

    #[error("Category {0} is still used by tasks")]
    CategoryInUse(Uuid),

    #[error("Group {0} still has projects")]
    GroupInUse(Uuid),

    #[error("User {0} still owns groups or projects")]
    UserInUse(Uuid),

    #[error("Password hash error: {0}")]
    PasswordHashError(String),

    #[error("Token generation error: {0}")]
    TokenGenerationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::ValidationError(_) | DomainError::EmptyUpdate => ErrorKind::Validation,
            DomainError::InvalidCredentials
            | DomainError::TokenExpired
            | DomainError::InvalidToken(_) => ErrorKind::Unauthorized,
            DomainError::UserNotFound(_)
            | DomainError::GroupNotFound(_)
            | DomainError::ProjectNotFound(_)
            | DomainError::CategoryNotFound(_)
            | DomainError::TaskNotFound(_) => ErrorKind::NotFound,
            DomainError::Forbidden(_) | DomainError::AdminRequired => ErrorKind::Forbidden,
            DomainError::EmailAlreadyExists(_)
            | DomainError::CategoryNameAlreadyExists { .. }
            | DomainError::StatusNameAlreadyExists(_)
            | DomainError::CategoryInUse(_)
            | DomainError::GroupInUse(_)
            | DomainError::UserInUse(_) => ErrorKind::Conflict,
            DomainError::PasswordHashError(_)
            | DomainError::TokenGenerationError(_)
            | DomainError::DatabaseError(_)
            | DomainError::InternalError(_) => ErrorKind::Internal,
        }
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(DomainError::EmptyUpdate.kind(), ErrorKind::Validation);
        assert_eq!(DomainError::TokenExpired.kind(), ErrorKind::Unauthorized);
        assert_eq!(DomainError::TaskNotFound(Uuid::nil()).kind(), ErrorKind::NotFound);
        assert_eq!(DomainError::AdminRequired.kind(), ErrorKind::Forbidden);
        assert_eq!(DomainError::GroupInUse(Uuid::nil()).kind(), ErrorKind::Conflict);
        assert_eq!(DomainError::DatabaseError("boom".into()).kind(), ErrorKind::Internal);
    }
}
