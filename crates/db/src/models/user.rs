//! User entity model and DTOs.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use podium_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains private profile fields (date of birth, gender) -- NEVER
/// serialize this to API responses directly. Use [`UserResponse`] for
/// external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role_id: DbId,
    /// Confirmed competitor ID, if one is attached to the account.
    pub competitor_id: Option<String>,
    /// Claimed competitor ID awaiting delegate approval.
    pub unconfirmed_competitor_id: Option<String>,
    /// The delegate expected to approve the pending claim.
    pub claim_delegate_id: Option<DbId>,
    pub dob: Option<NaiveDate>,
    pub gender: Option<String>,
    pub country_iso2: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
    /// Resolved role name (e.g. `"board"`, `"member"`).
    pub role: String,
    pub competitor_id: Option<String>,
    pub unconfirmed_competitor_id: Option<String>,
    pub country_iso2: Option<String>,
    /// Reasons the user currently cannot register for competitions.
    pub registration_blockers: Vec<&'static str>,
    pub created_at: Timestamp,
}
