//! Handlers for the `/competitions` resource.

use axum::extract::{Path, State};
use axum::Json;

use podium_core::error::CoreError;
use podium_core::roles::ROLE_BOARD;
use podium_core::types::DbId;
use podium_db::models::competition::Competition;
use podium_db::repositories::CompetitionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/competitions/{id}
///
/// A single competition. Competitions that are not publicly visible are
/// reported as not found to everyone except board members, so the
/// listing flag cannot be probed.
pub async fn get_competition(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(competition_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Competition>>> {
    let competition = CompetitionRepo::find_by_id(&state.pool, competition_id)
        .await?
        .filter(|competition| competition.is_visible || auth.role == ROLE_BOARD)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Competition",
            id: competition_id,
        }))?;

    Ok(Json(DataResponse { data: competition }))
}
