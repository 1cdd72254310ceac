// ============================================================================
// Task Board API - Auth Handlers
// File: crates/taskboard-api/src/handlers/auth.rs
// ============================================================================
//! Registration and login (the only unauthenticated routes besides health)

use axum::extract::State;
use tracing::info;
use validator::Validate;

use taskboard_core::domain::User;
use taskboard_shared::utils::mask_email;

use super::{created, ok, ApiResult, Created};
use crate::dto::{LoginRequest, LoginResponse, RegisterRequest};
use crate::extract::ApiJson;
use crate::state::AppState;

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterRequest>,
) -> Created<User> {
    payload.validate()?;

    let user = state
        .auth
        .register(&payload.name, &payload.email, &payload.password)
        .await?;
    info!("Registered {}", mask_email(&user.email));
    created(user)
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> ApiResult<LoginResponse> {
    payload.validate()?;

    let result = state.auth.login(&payload.email, &payload.password).await?;
    ok(LoginResponse {
        access_token: result.access_token,
        token_type: "Bearer",
        expires_in: result.expires_in,
        user_id: result.user.id,
        user: result.user,
    })
}
