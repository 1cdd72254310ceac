//! Database module (PostgreSQL adapters)

pub mod connection;
pub mod postgres;

use std::sync::Arc;

use sqlx::PgPool;
use taskboard_core::repositories::Repositories;

pub use connection::{create_pool, run_migrations};
pub use postgres::{
    PgAssignmentRepository, PgCategoryRepository, PgGroupRepository, PgProjectRepository,
    PgStatusRepository, PgTaskRepository, PgUserRepository,
};

/// Wires every repository to the same pool.
pub fn postgres_repositories(pool: PgPool) -> Repositories {
    Repositories {
        users: Arc::new(PgUserRepository::new(pool.clone())),
        groups: Arc::new(PgGroupRepository::new(pool.clone())),
        projects: Arc::new(PgProjectRepository::new(pool.clone())),
        categories: Arc::new(PgCategoryRepository::new(pool.clone())),
        statuses: Arc::new(PgStatusRepository::new(pool.clone())),
        tasks: Arc::new(PgTaskRepository::new(pool.clone())),
        assignments: Arc::new(PgAssignmentRepository::new(pool)),
    }
}
