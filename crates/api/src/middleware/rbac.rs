//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does
//! not meet the minimum requirement, enforcing authorization at the type
//! level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use podium_core::error::CoreError;
use podium_core::roles::ROLE_BOARD;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `board` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn board_only(RequireBoard(user): RequireBoard) -> AppResult<Json<()>> {
///     // user is guaranteed to be a board member here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireBoard(pub AuthUser);

impl FromRequestParts<AppState> for RequireBoard {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_BOARD {
            return Err(AppError::Core(CoreError::Forbidden(
                "Board role required".into(),
            )));
        }
        Ok(RequireBoard(user))
    }
}
