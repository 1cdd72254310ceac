//! Domain services (business logic)

pub mod auth_service;
pub mod user_service;
pub mod ownership;
pub mod group_service;
pub mod project_service;
pub mod category_service;
pub mod status_service;
pub mod task_service;
pub mod board_service;
mod lookup;
mod rollback;

pub use auth_service::{AuthPolicy, AuthService, LoginResult};
pub use user_service::{UserPatch, UserService};
pub use ownership::{OwnershipResolver, Resource, ResourceKind};
pub use group_service::GroupService;
pub use project_service::{BootstrappedProject, ProjectService};
pub use category_service::CategoryService;
pub use status_service::StatusService;
pub use task_service::{NewTask, TaskPatch, TaskService, TaskWithAssignees};
pub use board_service::BoardService;

#[cfg(test)]
pub(crate) mod test_support;
