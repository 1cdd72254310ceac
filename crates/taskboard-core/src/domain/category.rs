//! Category entity (board column within a project)

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Category {
    pub id: Uuid,
    pub project_id: Uuid,

    #[validate(length(min = 2, max = 50, message = "Category name must be between 2 and 50 characters"))]
    pub name: String,
}

impl Category {
    pub fn new(project_id: Uuid, name: String) -> Result<Self, validator::ValidationErrors> {
        let category = Self {
            id: Uuid::new_v4(),
            project_id,
            name: name.trim().to_string(),
        };

        category.validate()?;
        Ok(category)
    }
}
