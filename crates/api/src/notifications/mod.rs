//! Per-user notification generation.
//!
//! [`NotificationAggregator`] queries the records a user's notification
//! list depends on and assembles the ordered display list via
//! `podium_core::notifications`.

pub mod aggregator;

pub use aggregator::NotificationAggregator;
