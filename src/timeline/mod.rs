//! Timeline derivation for the browse UI.
//!
//! `chart` buckets one product's kickoff/launch/readout dates into ordered
//! chart points; `years` groups a region's records by launch year. Both are
//! derived fresh per request and never persisted.

pub mod chart;
pub mod years;

pub use chart::{
    build_timeline, EventKind, TimelineError, TimelineEvent, TimelinePoint, CUTOFF_YEAR,
};
pub use years::{group_by_year, YearGroup};
