//! Handlers for the `/notifications` resource.
//!
//! All endpoints require authentication via [`AuthUser`].

use axum::extract::State;
use axum::Json;

use podium_core::error::CoreError;
use podium_core::notifications::Notification;
use podium_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::notifications::NotificationAggregator;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/notifications
///
/// Build the authenticated user's notification list. The list is
/// assembled fresh on every request; absence of notification-worthy
/// conditions yields an empty array, never an error.
pub async fn list_notifications(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Notification>>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    let notifications = NotificationAggregator::new(state.pool.clone())
        .generate(&user)
        .await?;

    Ok(Json(DataResponse {
        data: notifications,
    }))
}
