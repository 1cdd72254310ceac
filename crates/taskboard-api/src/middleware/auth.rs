//! Bearer token authentication.
//!
//! Handlers that take an [`AuthUser`] only run for requests carrying a valid
//! `Authorization: Bearer <token>` header; everything else is rejected with 401.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::debug;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Identity of the caller, taken from the token subject.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("missing Authorization header".to_string()))?;

        let token = header_value
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Unauthorized("expected 'Bearer <token>'".to_string()))?;

        let user_id = state.auth.authenticate(token)?;
        debug!("Authenticated request for user {}", user_id);
        Ok(AuthUser { user_id })
    }
}
