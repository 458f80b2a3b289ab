//! Route definitions for the `/competitions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::competition;
use crate::state::AppState;

/// Routes mounted at `/competitions`.
///
/// ```text
/// GET    /{id}    -> get_competition
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", get(competition::get_competition))
}
