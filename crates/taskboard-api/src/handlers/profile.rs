//! Own profile handlers

use axum::extract::State;

use taskboard_core::domain::User;

use super::{ok, ApiResult};
use crate::dto::ProfileUpdateRequest;
use crate::extract::ApiJson;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /profile
pub async fn get_profile(State(state): State<AppState>, auth: AuthUser) -> ApiResult<User> {
    ok(state.users.profile(&auth.user_id).await?)
}

/// PUT /profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(payload): ApiJson<ProfileUpdateRequest>,
) -> ApiResult<User> {
    ok(state.users.update_profile(&auth.user_id, payload.into()).await?)
}
