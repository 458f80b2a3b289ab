//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::Json;

use podium_core::error::CoreError;
use podium_core::registration::registration_blockers;
use podium_db::models::user::UserResponse;
use podium_db::repositories::{RoleRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users/me
///
/// The authenticated user's own profile, including the reasons they
/// currently cannot register for competitions (empty when complete).
pub async fn me(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;
    let blockers = registration_blockers(
        &user.name,
        user.dob,
        user.gender.as_deref(),
        user.country_iso2.as_deref(),
    );

    Ok(Json(DataResponse {
        data: UserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            role,
            competitor_id: user.competitor_id,
            unconfirmed_competitor_id: user.unconfirmed_competitor_id,
            country_iso2: user.country_iso2,
            registration_blockers: blockers,
            created_at: user.created_at,
        },
    }))
}
