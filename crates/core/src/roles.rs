//! Well-known role name constants.
//!
//! These must match the seed data in `20260301000001_create_roles_table.sql`.

pub const ROLE_BOARD: &str = "board";
pub const ROLE_DELEGATE: &str = "delegate";
pub const ROLE_MEMBER: &str = "member";
