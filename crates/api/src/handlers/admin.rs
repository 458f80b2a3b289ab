//! Handlers for board-only administration endpoints.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use podium_db::models::competition::Competition;
use podium_db::repositories::CompetitionRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireBoard;
use crate::response::DataResponse;
use crate::state::AppState;

/// The two competition moderation queues shown to the board.
#[derive(Debug, Serialize)]
pub struct AttentionResponse {
    /// Confirmed but not yet publicly visible: ready to announce.
    pub awaiting_announcement: Vec<Competition>,
    /// Publicly visible but still unconfirmed: should be locked down.
    pub visible_unlocked: Vec<Competition>,
}

/// GET /api/v1/admin/competitions/attention
///
/// Competitions needing board action, split by which action is needed.
pub async fn competitions_attention(
    RequireBoard(_user): RequireBoard,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<AttentionResponse>>> {
    let awaiting_announcement = CompetitionRepo::awaiting_announcement(&state.pool).await?;
    let visible_unlocked = CompetitionRepo::visible_unlocked(&state.pool).await?;

    Ok(Json(DataResponse {
        data: AttentionResponse {
            awaiting_announcement,
            visible_unlocked,
        },
    }))
}
