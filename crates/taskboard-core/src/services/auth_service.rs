// ============================================================================
// Task Board Core - Authentication Service
// File: crates/taskboard-core/src/services/auth_service.rs
// ============================================================================
//! Credential service: registration, password verification and access tokens.

use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

use taskboard_security::{JwtError, JwtService, PasswordError, PasswordService};
use taskboard_shared::constants::MAX_PASSWORD_LENGTH;
use taskboard_shared::utils::{mask_email, normalize_email};

use crate::domain::User;
use crate::error::DomainError;
use crate::repositories::UserRepository;

/// Registration rules taken from configuration.
#[derive(Debug, Clone)]
pub struct AuthPolicy {
    pub admin_emails: Vec<String>,
    pub min_password_length: usize,
}

impl AuthPolicy {
    pub fn is_admin_email(&self, email: &str) -> bool {
        let email = normalize_email(email);
        self.admin_emails.iter().any(|e| normalize_email(e) == email)
    }

    pub fn check_password(&self, password: &str) -> Result<(), DomainError> {
        let len = password.chars().count();
        if len < self.min_password_length || len > MAX_PASSWORD_LENGTH {
            return Err(DomainError::ValidationError(format!(
                "password: Password must be between {} and {} characters",
                self.min_password_length, MAX_PASSWORD_LENGTH
            )));
        }
        Ok(())
    }

    pub fn hash_password(&self, password: &str) -> Result<String, DomainError> {
        self.check_password(password)?;
        PasswordService::hash(password).map_err(|e| match e {
            PasswordError::Hashing(reason) => DomainError::PasswordHashError(reason),
            PasswordError::MalformedHash(reason) => {
                DomainError::InternalError(format!("freshly hashed password unreadable: {}", reason))
            }
        })
    }
}

/// Authentication service for handling register/login flows
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    jwt: Arc<JwtService>,
    policy: AuthPolicy,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, jwt: Arc<JwtService>, policy: AuthPolicy) -> Self {
        Self { users, jwt, policy }
    }

    pub fn policy(&self) -> &AuthPolicy {
        &self.policy
    }

    /// Register a new user
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, DomainError> {
        info!("Registration attempt for email: {}", mask_email(email));

        self.policy.check_password(password)?;

        if self.users.find_by_email(email).await?.is_some() {
            warn!("Registration failed: email already exists: {}", mask_email(email));
            return Err(DomainError::EmailAlreadyExists(normalize_email(email)));
        }

        let password_hash = self.policy.hash_password(password)?;
        let user = User::new(
            name.to_string(),
            email.to_string(),
            password_hash,
            self.policy.is_admin_email(email),
        )?;

        let created = self.users.create(&user).await?;
        info!("Registration successful for user {}", created.id);
        Ok(created)
    }

    /// Checks an email/password pair and returns the matching user.
    pub async fn verify(&self, email: &str, password: &str) -> Result<User, DomainError> {
        let user = self.users.find_by_email(email).await?.ok_or_else(|| {
            warn!("Login failed: email not found: {}", mask_email(email));
            DomainError::InvalidCredentials
        })?;

        let valid = match PasswordService::verify(password, &user.password_hash) {
            Ok(valid) => valid,
            Err(PasswordError::MalformedHash(reason)) => {
                error!("Stored password hash of user {} is unreadable: {}", user.id, reason);
                false
            }
            Err(PasswordError::Hashing(reason)) => return Err(DomainError::PasswordHashError(reason)),
        };
        if !valid {
            warn!("Login failed: invalid password for: {}", mask_email(email));
            return Err(DomainError::InvalidCredentials);
        }
        Ok(user)
    }

    /// Login with email and password
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, DomainError> {
        let user = self.verify(email, password).await?;
        let access_token = self.issue_token(&user.id)?;

        info!("Login successful for user {}", user.id);
        Ok(LoginResult {
            user,
            access_token,
            expires_in: self.jwt.access_token_expiry(),
        })
    }

    pub fn issue_token(&self, user_id: &Uuid) -> Result<String, DomainError> {
        self.jwt
            .generate_access_token(user_id)
            .map_err(|e| DomainError::TokenGenerationError(e.to_string()))
    }

    /// Resolves a bearer token to the user identity it carries.
    pub fn authenticate(&self, token: &str) -> Result<Uuid, DomainError> {
        self.jwt.identity(token).map_err(|e| match e {
            JwtError::TokenExpired => DomainError::TokenExpired,
            other => DomainError::InvalidToken(other.to_string()),
        })
    }
}

/// Result of successful login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
    pub access_token: String,
    /// Seconds until the token expires.
    pub expires_in: i64,
}
