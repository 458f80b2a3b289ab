//! HTTP request handlers, grouped by resource.

pub mod admin;
pub mod competition;
pub mod notification;
pub mod user;
