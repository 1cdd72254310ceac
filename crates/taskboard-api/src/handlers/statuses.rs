use axum::extract::State;

use taskboard_core::domain::Status;

use super::{ok, ApiResult};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /statuses
pub async fn list_statuses(State(state): State<AppState>, _auth: AuthUser) -> ApiResult<Vec<Status>> {
    ok(state.statuses.list_statuses().await?)
}
