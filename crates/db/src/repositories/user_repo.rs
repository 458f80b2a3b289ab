//! Repository for the `users` table.

use sqlx::PgPool;

use podium_core::types::DbId;

use crate::models::user::User;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, role_id, competitor_id, unconfirmed_competitor_id, \
                       claim_delegate_id, dob, gender, country_iso2, created_at, updated_at";

/// Provides read operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List users whose pending competitor-ID claim names the given user
    /// as the approving delegate, oldest account first.
    pub async fn claimants_for_delegate(
        pool: &PgPool,
        delegate_id: DbId,
    ) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users \
             WHERE claim_delegate_id = $1 \
               AND unconfirmed_competitor_id IS NOT NULL \
               AND competitor_id IS NULL \
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(delegate_id)
            .fetch_all(pool)
            .await
    }
}
