//! Static seed data loaded at process start.
//!
//! The baseline is immutable; queries see it concatenated with whatever has
//! been submitted during the session. Post-2030 entries keep the cutoff
//! bucket exercised with real data.

use crate::models::{LaunchRecord, Region};

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    product_name: &str,
    base_product_name: &str,
    (year, month, day): (i32, u32, u32),
    region: Region,
    category: &str,
    description: &str,
    strategy_kickoff_date: &str,
    market_readout_date: &str,
) -> LaunchRecord {
    LaunchRecord {
        id: id.into(),
        product_name: product_name.into(),
        base_product_name: base_product_name.into(),
        year,
        month,
        day,
        region,
        category: category.into(),
        description: Some(description.into()),
        strategy_kickoff_date: strategy_kickoff_date.into(),
        market_readout_date: market_readout_date.into(),
    }
}

pub fn initial_launches() -> Vec<LaunchRecord> {
    vec![
        record(
            "aurora-x1-us",
            "Aurora X1",
            "Aurora X1",
            (2025, 3, 10),
            Region::US,
            "Smartphone",
            "Flagship phone, lead market",
            "2024-06-15",
            "2025-09-30",
        ),
        record(
            "aurora-x1-eu",
            "Aurora X1 (EU)",
            "Aurora X1",
            (2025, 4, 22),
            Region::EU,
            "Smartphone",
            "EU rollout one quarter behind the US",
            "2024-06-15",
            "2025-11-15",
        ),
        record(
            "aurora-x1-cn",
            "Aurora X1 Pro Max",
            "Aurora X1",
            (2025, 6, 18),
            Region::CN,
            "Smartphone",
            "China variant with dual-SIM hardware",
            "2024-09-01",
            "2026-01-20",
        ),
        record(
            "aurora-x1-jp",
            "Aurora X1",
            "Aurora X1",
            (2025, 6, 18),
            Region::JP,
            "Smartphone",
            "Ships alongside the CN launch",
            "2024-09-01",
            "2026-01-20",
        ),
        record(
            "solace-hub-us",
            "Solace Hub",
            "Solace Hub",
            (2026, 2, 3),
            Region::US,
            "Smart Home",
            "Matter-first home controller",
            "2025-05-12",
            "2026-08-01",
        ),
        record(
            "solace-hub-eu",
            "Solace Hub",
            "Solace Hub",
            (2026, 5, 19),
            Region::EU,
            "Smart Home",
            "Localized voice stack for DACH and Nordics",
            "2025-05-12",
            "2026-11-30",
        ),
        record(
            "nimbus-drive-us",
            "Nimbus Drive",
            "Nimbus Drive",
            (2031, 1, 15),
            Region::US,
            "Storage",
            "Long-range roadmap item, dates tentative",
            "2030-03-01",
            "2031-10-01",
        ),
        record(
            "nimbus-drive-jp",
            "Nimbus Drive",
            "Nimbus Drive",
            (2033, 7, 1),
            Region::JP,
            "Storage",
            "Follows the US availability window",
            "2030-03-01",
            "2034-02-01",
        ),
        record(
            "quill-pad-cn",
            "Quill Pad",
            "Quill Pad",
            (2024, 11, 8),
            Region::CN,
            "Tablet",
            "China-first e-ink tablet",
            "2024-01-20",
            "2025-05-05",
        ),
        record(
            "quill-pad-us",
            "Quill Pad",
            "Quill Pad",
            (2025, 2, 14),
            Region::US,
            "Tablet",
            "US availability after the CN readout cycle starts",
            "2024-01-20",
            "2025-08-18",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let launches = initial_launches();
        let mut ids: Vec<&str> = launches.iter().map(|launch| launch.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), launches.len());
    }

    #[test]
    fn test_seed_dates_all_parse() {
        for launch in initial_launches() {
            assert!(launch.kickoff_date().is_some(), "kickoff on {}", launch.id);
            assert!(launch.launch_date().is_some(), "launch on {}", launch.id);
            assert!(launch.readout_date().is_some(), "readout on {}", launch.id);
        }
    }

    #[test]
    fn test_seed_covers_every_region() {
        let launches = initial_launches();
        for region in Region::ALL {
            assert!(launches.iter().any(|launch| launch.region == region));
        }
    }
}
