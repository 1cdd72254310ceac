//! Repository traits (ports)

pub mod user_repository;
pub mod group_repository;
pub mod project_repository;
pub mod category_repository;
pub mod status_repository;
pub mod task_repository;
pub mod assignment_repository;

use std::sync::Arc;

pub use user_repository::UserRepository;
pub use group_repository::GroupRepository;
pub use project_repository::ProjectRepository;
pub use category_repository::CategoryRepository;
pub use status_repository::StatusRepository;
pub use task_repository::TaskRepository;
pub use assignment_repository::AssignmentRepository;

#[cfg(test)]
pub use assignment_repository::MockAssignmentRepository;
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use group_repository::MockGroupRepository;
#[cfg(test)]
pub use project_repository::MockProjectRepository;
#[cfg(test)]
pub use status_repository::MockStatusRepository;
#[cfg(test)]
pub use task_repository::MockTaskRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;

/// Every table of the record store, as seen by the services.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub groups: Arc<dyn GroupRepository>,
    pub projects: Arc<dyn ProjectRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub statuses: Arc<dyn StatusRepository>,
    pub tasks: Arc<dyn TaskRepository>,
    pub assignments: Arc<dyn AssignmentRepository>,
}
