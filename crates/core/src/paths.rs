//! Site route path builders.
//!
//! Notification URLs and redirect targets are built here so the URL shape
//! of the frontend routes lives in one place. Builders return relative
//! paths; the frontend origin is prepended by the client.

use crate::types::DbId;

/// Fragment anchor for the competitor-ID section of the user edit screen.
pub const ANCHOR_COMPETITOR_ID: &str = "competitor-id";

/// Edit screen for a competition, used by its organizers and delegates.
pub fn competition_edit_path(competition_id: DbId) -> String {
    format!("/competitions/{competition_id}/edit")
}

/// Administrative edit screen for a competition (board only).
pub fn admin_competition_edit_path(competition_id: DbId) -> String {
    format!("/admin/competitions/{competition_id}/edit")
}

/// Edit screen for a user, optionally anchored to a section.
pub fn user_edit_path(user_id: DbId, anchor: Option<&str>) -> String {
    match anchor {
        Some(fragment) => format!("/users/{user_id}/edit#{fragment}"),
        None => format!("/users/{user_id}/edit"),
    }
}

/// Screen where a user claims a competitor ID for their account.
pub fn profile_claim_competitor_id_path() -> String {
    "/profile/claim-competitor-id".to_string()
}

/// The user's own profile edit screen.
pub fn profile_edit_path() -> String {
    "/profile/edit".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competition_edit_path() {
        assert_eq!(competition_edit_path(7), "/competitions/7/edit");
    }

    #[test]
    fn test_admin_competition_edit_path() {
        assert_eq!(admin_competition_edit_path(7), "/admin/competitions/7/edit");
    }

    #[test]
    fn test_user_edit_path_without_anchor() {
        assert_eq!(user_edit_path(12, None), "/users/12/edit");
    }

    #[test]
    fn test_user_edit_path_with_anchor() {
        assert_eq!(
            user_edit_path(12, Some(ANCHOR_COMPETITOR_ID)),
            "/users/12/edit#competitor-id"
        );
    }
}
