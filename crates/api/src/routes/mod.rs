pub mod admin;
pub mod competition;
pub mod health;
pub mod notification;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /notifications                       the authenticated user's notification list
///
/// /users/me                            own profile incl. registration blockers
///
/// /competitions/{id}                   competition view (hidden ones board-only)
///
/// /admin/competitions/attention        board moderation queues
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/notifications", notification::router())
        .nest("/users", user::router())
        .nest("/competitions", competition::router())
        .nest("/admin", admin::router())
}
