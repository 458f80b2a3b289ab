//! Competition entity model.

use serde::Serialize;
use sqlx::FromRow;

use podium_core::types::{DbId, Timestamp};

/// A row from the `competitions` table.
///
/// `is_confirmed` and `is_visible` are independent flags: the first locks
/// the competition against edits by its staff, the second controls public
/// listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Competition {
    pub id: DbId,
    pub name: String,
    pub is_confirmed: bool,
    pub is_visible: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
