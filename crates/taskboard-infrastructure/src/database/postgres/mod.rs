//! PostgreSQL repository implementations

pub mod user_repo_impl;
pub mod group_repo_impl;
pub mod project_repo_impl;
pub mod category_repo_impl;
pub mod status_repo_impl;
pub mod task_repo_impl;
pub mod assignment_repo_impl;

pub use user_repo_impl::PgUserRepository;
pub use group_repo_impl::PgGroupRepository;
pub use project_repo_impl::PgProjectRepository;
pub use category_repo_impl::PgCategoryRepository;
pub use status_repo_impl::PgStatusRepository;
pub use task_repo_impl::PgTaskRepository;
pub use assignment_repo_impl::PgAssignmentRepository;

use taskboard_core::error::DomainError;
use tracing::error;

/// Logs a store failure and converts it to the domain's opaque database error.
pub(crate) fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    DomainError::DatabaseError(e.to_string())
}

pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}
