//! Repository for the `competitions` table and its staff join tables.

use sqlx::PgPool;

use podium_core::types::DbId;

use crate::models::competition::Competition;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, is_confirmed, is_visible, created_at, updated_at";

/// Provides read operations for competitions.
pub struct CompetitionRepo;

impl CompetitionRepo {
    /// Find a competition by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Competition>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM competitions WHERE id = $1");
        sqlx::query_as::<_, Competition>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List unconfirmed competitions the given user delegates, in id order.
    pub async fn delegated_unconfirmed(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Competition>, sqlx::Error> {
        Self::staffed_unconfirmed(pool, "competition_delegates", user_id).await
    }

    /// List unconfirmed competitions the given user organizes, in id order.
    pub async fn organized_unconfirmed(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Competition>, sqlx::Error> {
        Self::staffed_unconfirmed(pool, "competition_organizers", user_id).await
    }

    /// List competitions confirmed but not yet publicly visible -- the
    /// board queue of competitions waiting to be announced.
    pub async fn awaiting_announcement(pool: &PgPool) -> Result<Vec<Competition>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM competitions \
             WHERE is_confirmed = true AND is_visible = false \
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Competition>(&query).fetch_all(pool).await
    }

    /// List competitions publicly visible while still unconfirmed -- the
    /// board queue of competitions that should be locked down.
    pub async fn visible_unlocked(pool: &PgPool) -> Result<Vec<Competition>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM competitions \
             WHERE is_confirmed = false AND is_visible = true \
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Competition>(&query).fetch_all(pool).await
    }

    /// Shared query for the two staff join tables.
    ///
    /// `join_table` is always one of the two compile-time constants above,
    /// never user input.
    async fn staffed_unconfirmed(
        pool: &PgPool,
        join_table: &str,
        user_id: DbId,
    ) -> Result<Vec<Competition>, sqlx::Error> {
        let query = format!(
            "SELECT c.id, c.name, c.is_confirmed, c.is_visible, c.created_at, c.updated_at \
             FROM competitions c \
             JOIN {join_table} s ON s.competition_id = c.id \
             WHERE s.user_id = $1 AND c.is_confirmed = false \
             ORDER BY c.id ASC"
        );
        sqlx::query_as::<_, Competition>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
