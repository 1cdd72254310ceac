// ============================================================================
// Task Board Core - Project Entity
// File: crates/taskboard-core/src/domain/project.rs
// Description: Project owned by its creator; root of categories and tasks
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Project {
    pub id: Uuid,
    pub group_id: Uuid,

    #[validate(length(min = 2, max = 100, message = "Project name must be between 2 and 100 characters"))]
    pub name: String,

    /// Sole authority for mutations on the project and everything beneath it.
    pub creator_user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn new(
        group_id: Uuid,
        name: String,
        creator_user_id: Uuid,
    ) -> Result<Self, validator::ValidationErrors> {
        let project = Self {
            id: Uuid::new_v4(),
            group_id,
            name: name.trim().to_string(),
            creator_user_id,
            created_at: Utc::now(),
        };

        project.validate()?;
        Ok(project)
    }

    pub fn is_owned_by(&self, user_id: &Uuid) -> bool {
        self.creator_user_id == *user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_project() {
        let owner = Uuid::new_v4();
        let project = Project::new(Uuid::new_v4(), " Roadmap ".to_string(), owner).unwrap();
        assert_eq!(project.name, "Roadmap");
        assert!(project.is_owned_by(&owner));
        assert!(!project.is_owned_by(&Uuid::new_v4()));
    }

    #[test]
    fn test_name_boundary() {
        for bad in ["", " ", "R", "  R  "] {
            assert!(Project::new(Uuid::new_v4(), bad.to_string(), Uuid::new_v4()).is_err());
        }
        assert!(Project::new(Uuid::new_v4(), "Ro".to_string(), Uuid::new_v4()).is_ok());
    }
}
