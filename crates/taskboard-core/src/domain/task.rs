// ============================================================================
// Task Board Core - Task Entity
// File: crates/taskboard-core/src/domain/task.rs
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use taskboard_shared::constants::{MAX_NAME_LENGTH, MAX_PRIORITY, MIN_NAME_LENGTH, MIN_PRIORITY};

use crate::error::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Task {
    pub id: Uuid,
    pub project_id: Uuid,
    pub category_id: Uuid,
    pub status_id: Uuid,

    #[validate(length(min = 2, max = 100, message = "Title must be between 2 and 100 characters"))]
    pub title: String,

    pub description: Option<String>,

    #[validate(range(min = 1, max = 5, message = "Priority must be between 1 and 5"))]
    pub priority: i32,

    pub created_at: DateTime<Utc>,
    pub due_at: Option<DateTime<Utc>>,
}

impl Task {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        project_id: Uuid,
        category_id: Uuid,
        status_id: Uuid,
        title: String,
        description: Option<String>,
        priority: i32,
        due_at: Option<DateTime<Utc>>,
    ) -> Result<Self, validator::ValidationErrors> {
        let task = Self {
            id: Uuid::new_v4(),
            project_id,
            category_id,
            status_id,
            title: title.trim().to_string(),
            description,
            priority,
            created_at: Utc::now(),
            due_at,
        };

        task.validate()?;
        Ok(task)
    }

    /// Trims a title and checks its length, before any row is touched.
    pub fn check_title(title: &str) -> Result<String, DomainError> {
        let trimmed = title.trim();
        let len = trimmed.chars().count() as u64;
        if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&len) {
            return Err(DomainError::ValidationError(format!(
                "title: Title must be between {} and {} characters",
                MIN_NAME_LENGTH, MAX_NAME_LENGTH
            )));
        }
        Ok(trimmed.to_string())
    }

    pub fn check_priority(priority: i32) -> Result<i32, DomainError> {
        if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&priority) {
            return Err(DomainError::ValidationError(format!(
                "priority: Priority must be between {} and {}",
                MIN_PRIORITY, MAX_PRIORITY
            )));
        }
        Ok(priority)
    }
}

/// Task joined with the names of its category and status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDetail {
    #[serde(flatten)]
    pub task: Task,
    pub category_name: String,
    pub status_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_boundary() {
        assert!(Task::check_title("").is_err());
        assert!(Task::check_title("   ").is_err());
        assert!(Task::check_title(" D ").is_err());
        assert_eq!(Task::check_title(" De ").unwrap(), "De");
        assert!(Task::check_title(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_priority_boundary() {
        assert!(Task::check_priority(0).is_err());
        assert!(Task::check_priority(6).is_err());
        assert_eq!(Task::check_priority(1).unwrap(), 1);
        assert_eq!(Task::check_priority(5).unwrap(), 5);
    }

    #[test]
    fn test_new_task_validates() {
        let ids = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        assert!(Task::new(ids.0, ids.1, ids.2, "Design API".into(), None, 3, None).is_ok());
        assert!(Task::new(ids.0, ids.1, ids.2, "Design API".into(), None, 7, None).is_err());
    }
}
