//! Role entity model.

use sqlx::FromRow;

use podium_core::types::{DbId, Timestamp};

/// A role row from the `roles` table.
///
/// Well-known role names live in `podium_core::roles`.
#[derive(Debug, Clone, FromRow)]
pub struct Role {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
