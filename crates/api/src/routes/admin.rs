//! Route definitions for board-only administration endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /competitions/attention    -> competitions_attention (board only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/competitions/attention",
        get(admin::competitions_attention),
    )
}
