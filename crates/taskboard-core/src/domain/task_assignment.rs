//! Task-user assignment (join entity)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskAssignment {
    pub task_id: Uuid,
    pub user_id: Uuid,
}

impl TaskAssignment {
    pub fn new(task_id: Uuid, user_id: Uuid) -> Self {
        Self { task_id, user_id }
    }
}
