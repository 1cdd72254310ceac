use axum::extract::State;
use uuid::Uuid;

use taskboard_core::domain::Board;

use super::{ok, ApiResult};
use crate::extract::ApiPath;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /board/{project_id}
pub async fn get_board(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(project_id): ApiPath<Uuid>,
) -> ApiResult<Board> {
    ok(state.board.get_board(&auth.user_id, &project_id).await?)
}
