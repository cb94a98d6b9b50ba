//! Timeline Bucketing Engine.
//!
//! Takes every record of one product line (all regions) and collapses the
//! three key dates per record into an ordered sequence of timestamp buckets.
//! Dates at or past the cutoff year land in a single synthetic bucket so the
//! chart does not stretch to cover speculative roadmap entries.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::Serialize;
use thiserror::Error;

use crate::models::{LaunchRecord, Region};

/// Years at or past this collapse into one `"2030+"` bucket.
pub const CUTOFF_YEAR: i32 = 2030;

/// Every point sits on one horizontal chart level.
const BASELINE_Y: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventKind {
    #[serde(rename = "Strategy Kickoff")]
    StrategyKickoff,
    #[serde(rename = "Launch")]
    Launch,
    #[serde(rename = "Market Readout")]
    MarketReadout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub region: Region,
    #[serde(rename = "dateType")]
    pub kind: EventKind,
    /// Fully formatted, e.g. `March 10, 2025`.
    pub full_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    /// ISO date of whichever event opened this bucket. Advisory only for the
    /// cutoff bucket, where the underlying dates differ.
    pub date: String,
    /// Normalized midnight instant in milliseconds; the bucket key.
    pub timestamp: i64,
    /// `Mar 10`, or `2030+` for the cutoff bucket.
    pub display_date: String,
    pub y: u8,
    pub events: Vec<TimelineEvent>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimelineError {
    /// Submission validation should make this unreachable; hitting it means
    /// the store holds a record validation never saw.
    #[error("Unparseable date {value:?} on launch {id}")]
    UnparseableDate { id: String, value: String },
}

/// The single construction point for instants. Both date sources (ISO-string
/// parse and y/m/d construction) funnel through here, so the same calendar
/// day always yields the same millisecond timestamp.
fn midnight_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

fn cutoff_millis() -> i64 {
    midnight_millis(NaiveDate::from_ymd_opt(CUTOFF_YEAR, 1, 1).expect("Jan 1 is a valid date"))
}

fn normalized_instant(date: NaiveDate) -> i64 {
    if date.year() >= CUTOFF_YEAR {
        cutoff_millis()
    } else {
        midnight_millis(date)
    }
}

fn bucket_label(date: NaiveDate) -> String {
    if date.year() >= CUTOFF_YEAR {
        format!("{CUTOFF_YEAR}+")
    } else {
        date.format("%b %-d").to_string()
    }
}

fn full_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn derive_dates(launch: &LaunchRecord) -> Result<[(EventKind, NaiveDate); 3], TimelineError> {
    let unparseable = |value: String| TimelineError::UnparseableDate {
        id: launch.id.clone(),
        value,
    };
    let kickoff = launch
        .kickoff_date()
        .ok_or_else(|| unparseable(launch.strategy_kickoff_date.clone()))?;
    let launch_date = launch
        .launch_date()
        .ok_or_else(|| unparseable(format!("{}-{}-{}", launch.year, launch.month, launch.day)))?;
    let readout = launch
        .readout_date()
        .ok_or_else(|| unparseable(launch.market_readout_date.clone()))?;
    Ok([
        (EventKind::StrategyKickoff, kickoff),
        (EventKind::Launch, launch_date),
        (EventKind::MarketReadout, readout),
    ])
}

/// Buckets all key dates of `launches` (one product line) by normalized
/// timestamp, ascending. Events within a bucket keep record order (records
/// sorted by launch year then month) and kickoff/launch/readout order per
/// record. Distinct non-cutoff instants never merge.
pub fn build_timeline(launches: &[LaunchRecord]) -> Result<Vec<TimelinePoint>, TimelineError> {
    let mut sorted: Vec<&LaunchRecord> = launches.iter().collect();
    sorted.sort_by_key(|launch| (launch.year, launch.month));

    let mut buckets: BTreeMap<i64, TimelinePoint> = BTreeMap::new();
    for launch in sorted {
        for (kind, date) in derive_dates(launch)? {
            let timestamp = normalized_instant(date);
            let point = buckets.entry(timestamp).or_insert_with(|| TimelinePoint {
                date: date.format("%Y-%m-%d").to_string(),
                timestamp,
                display_date: bucket_label(date),
                y: BASELINE_Y,
                events: Vec::new(),
            });
            point.events.push(TimelineEvent {
                region: launch.region,
                kind,
                full_date: full_date(date),
            });
        }
    }

    Ok(buckets.into_values().collect())
}
