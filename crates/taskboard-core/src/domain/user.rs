// ============================================================================
// Task Board Core - User Entity
// File: crates/taskboard-core/src/domain/user.rs
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use taskboard_shared::utils::normalize_email;

/// Registered account
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    pub id: Uuid,

    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: String,

    #[validate(email(message = "Email is not valid"))]
    pub email: String,

    #[serde(skip_serializing)]
    pub password_hash: String,

    pub is_admin: bool,
    pub registered_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        name: String,
        email: String,
        password_hash: String,
        is_admin: bool,
    ) -> Result<Self, validator::ValidationErrors> {
        let user = Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            email: normalize_email(&email),
            password_hash,
            is_admin,
            registered_at: Utc::now(),
        };

        user.validate()?;
        Ok(user)
    }

    pub fn rename(&mut self, name: &str) {
        self.name = name.trim().to_string();
    }

    pub fn change_email(&mut self, email: &str) {
        self.email = normalize_email(email);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_normalizes() {
        let user = User::new("  Ana Ruiz ".into(), " Ana@X.com".into(), "hash".into(), false).unwrap();
        assert_eq!(user.name, "Ana Ruiz");
        assert_eq!(user.email, "ana@x.com");
        assert!(!user.is_admin);
    }

    #[test]
    fn test_name_boundary() {
        assert!(User::new(" A ".into(), "a@x.com".into(), "h".into(), false).is_err());
        assert!(User::new("Al".into(), "a@x.com".into(), "h".into(), false).is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(User::new("Ana".into(), "not-an-email".into(), "h".into(), false).is_err());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new("Ana".into(), "ana@x.com".into(), "secret-hash".into(), false).unwrap();
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret-hash"));
    }
}
