//! Launchboard
//!
//! A small service for tracking product launch events across regions:
//! - Append-only in-memory launch record store with a static seed baseline
//! - Region query + submission API (axum)
//! - Timeline bucketing for the per-product chart and year-grouped views

pub mod models;
pub mod seed;
pub mod server;
pub mod store;
pub mod timeline;

// Re-exports for convenience
pub use models::{LaunchRecord, Region};
pub use store::LaunchStore;
pub use timeline::{build_timeline, group_by_year, TimelinePoint};
