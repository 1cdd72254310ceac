//! # Task Board Core - Domain Module
//! 
//! Domain entities for the task board.

pub mod user;
pub mod group;
pub mod project;
pub mod category;
pub mod status;
pub mod task;
pub mod task_assignment;
pub mod board;

// Re-export all entities
pub use user::User;
pub use group::Group;
pub use project::Project;
pub use category::Category;
pub use status::Status;
pub use task::{Task, TaskDetail};
pub use task_assignment::TaskAssignment;
pub use board::{Board, BoardColumns, BoardSummary, Bucket, BucketCounts, TaskCard};
