//! Work group entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Group {
    pub id: Uuid,

    #[validate(length(min = 2, max = 100, message = "Group name must be between 2 and 100 characters"))]
    pub name: String,

    pub creator_user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Group {
    pub fn new(name: String, creator_user_id: Uuid) -> Result<Self, validator::ValidationErrors> {
        let group = Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            creator_user_id,
            created_at: Utc::now(),
        };

        group.validate()?;
        Ok(group)
    }

    pub fn is_owned_by(&self, user_id: &Uuid) -> bool {
        self.creator_user_id == *user_id
    }
}
