//! Domain and presentation logic for the podium platform.
//!
//! This crate has zero internal dependencies and performs no I/O, so it
//! can be used by the API layer, the repository layer, and any future CLI
//! or worker tooling.

pub mod error;
pub mod markdown;
pub mod notifications;
pub mod paths;
pub mod registration;
pub mod roles;
pub mod text;
pub mod types;
