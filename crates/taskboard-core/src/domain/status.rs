//! Status entity, shared by every project

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Status {
    pub id: Uuid,

    #[validate(length(min = 2, max = 50, message = "Status name must be between 2 and 50 characters"))]
    pub name: String,
}

impl Status {
    pub fn new(name: String) -> Result<Self, validator::ValidationErrors> {
        let status = Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
        };

        status.validate()?;
        Ok(status)
    }
}
