//! Entity models and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the
//! database row, plus any safe response representations the API exposes.

pub mod competition;
pub mod role;
pub mod user;
