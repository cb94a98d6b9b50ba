//! Timeline Bucketing Engine properties.

use launchboard::models::{LaunchRecord, Region};
use launchboard::timeline::{build_timeline, EventKind, TimelineError};

fn record(
    base: &str,
    region: Region,
    (year, month, day): (i32, u32, u32),
    kickoff: &str,
    readout: &str,
) -> LaunchRecord {
    LaunchRecord {
        id: format!("{}-{}", base.to_lowercase(), region.code().to_lowercase()),
        product_name: base.into(),
        base_product_name: base.into(),
        year,
        month,
        day,
        region,
        category: "Test".into(),
        description: None,
        strategy_kickoff_date: kickoff.into(),
        market_readout_date: readout.into(),
    }
}

#[test]
fn test_single_record_produces_three_ordered_buckets() {
    let launches = vec![record(
        "X",
        Region::US,
        (2025, 3, 10),
        "2025-01-01",
        "2025-06-01",
    )];
    let points = build_timeline(&launches).unwrap();

    assert_eq!(points.len(), 3);
    let labels: Vec<&str> = points.iter().map(|p| p.display_date.as_str()).collect();
    assert_eq!(labels, vec!["Jan 1", "Mar 10", "Jun 1"]);
    let dates: Vec<&str> = points.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(dates, vec!["2025-01-01", "2025-03-10", "2025-06-01"]);

    let kinds: Vec<EventKind> = points
        .iter()
        .map(|p| {
            assert_eq!(p.events.len(), 1);
            p.events[0].kind
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            EventKind::StrategyKickoff,
            EventKind::Launch,
            EventKind::MarketReadout
        ]
    );
    assert_eq!(points[1].events[0].full_date, "March 10, 2025");
    assert!(points.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
}

#[test]
fn test_bucketing_is_idempotent() {
    let launches = vec![
        record("X", Region::US, (2025, 3, 10), "2025-01-01", "2025-06-01"),
        record("X", Region::EU, (2025, 4, 22), "2025-01-01", "2025-11-15"),
        record("X", Region::JP, (2031, 1, 15), "2030-03-01", "2031-10-01"),
    ];
    let first = build_timeline(&launches).unwrap();
    let second = build_timeline(&launches).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_cutoff_years_collapse_into_one_bucket() {
    // Every date at or past 2030: exactly one "2030+" bucket holds all six
    // events.
    let launches = vec![
        record("X", Region::US, (2031, 1, 15), "2030-03-01", "2031-10-01"),
        record("X", Region::JP, (2033, 7, 1), "2030-06-01", "2034-02-01"),
    ];
    let points = build_timeline(&launches).unwrap();

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].display_date, "2030+");
    assert_eq!(points[0].events.len(), 6);
}

#[test]
fn test_cutoff_bucket_date_is_first_creator() {
    // The cutoff bucket keeps the ISO date of whichever event opened it;
    // advisory only, not necessarily the earliest date.
    let launches = vec![
        record("X", Region::US, (2031, 1, 15), "2030-03-01", "2031-10-01"),
        record("X", Region::JP, (2033, 7, 1), "2030-06-01", "2034-02-01"),
    ];
    let points = build_timeline(&launches).unwrap();
    // First record sorts first (2031 < 2033) and its kickoff runs first.
    assert_eq!(points[0].date, "2030-03-01");
}

#[test]
fn test_shared_dates_merge_across_records_and_paths() {
    // EU kickoff string equals the US launch y/m/d date; they must land in
    // the same bucket even though they come from different construction
    // paths.
    let launches = vec![
        record("X", Region::US, (2025, 3, 10), "2025-01-01", "2025-06-01"),
        record("X", Region::EU, (2025, 5, 2), "2025-03-10", "2025-07-01"),
    ];
    let points = build_timeline(&launches).unwrap();

    let shared = points
        .iter()
        .find(|p| p.display_date == "Mar 10")
        .expect("shared bucket");
    assert_eq!(shared.events.len(), 2);
    // Record order first (US sorts before EU by launch month), then
    // kickoff/launch/readout within a record.
    assert_eq!(shared.events[0].region, Region::US);
    assert_eq!(shared.events[0].kind, EventKind::Launch);
    assert_eq!(shared.events[1].region, Region::EU);
    assert_eq!(shared.events[1].kind, EventKind::StrategyKickoff);
}

#[test]
fn test_distinct_days_never_merge() {
    let launches = vec![
        record("X", Region::US, (2025, 3, 10), "2025-03-09", "2025-03-11"),
    ];
    let points = build_timeline(&launches).unwrap();
    assert_eq!(points.len(), 3);
}

#[test]
fn test_mixed_cutoff_and_regular_dates() {
    // Kickoff before the cutoff, launch and readout past it: two buckets,
    // the capped one last.
    let launches = vec![record(
        "X",
        Region::US,
        (2031, 1, 15),
        "2028-03-01",
        "2031-10-01",
    )];
    let points = build_timeline(&launches).unwrap();

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].display_date, "Mar 1");
    assert_eq!(points[1].display_date, "2030+");
    assert_eq!(points[1].events.len(), 2);
}

#[test]
fn test_empty_input_yields_empty_timeline() {
    assert!(build_timeline(&[]).unwrap().is_empty());
}

#[test]
fn test_unparseable_date_is_a_typed_error() {
    let launches = vec![record(
        "X",
        Region::US,
        (2025, 3, 10),
        "not-a-date",
        "2025-06-01",
    )];
    let err = build_timeline(&launches).unwrap_err();
    assert_eq!(
        err,
        TimelineError::UnparseableDate {
            id: "x-us".into(),
            value: "not-a-date".into(),
        }
    );
}

#[test]
fn test_all_points_share_the_baseline_level() {
    let launches = vec![
        record("X", Region::US, (2025, 3, 10), "2025-01-01", "2025-06-01"),
        record("X", Region::CN, (2026, 6, 18), "2025-09-01", "2027-01-20"),
    ];
    let points = build_timeline(&launches).unwrap();
    assert!(points.iter().all(|p| p.y == 1));
}
