//! Per-year grouping for the region browse view.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::LaunchRecord;

use super::chart::CUTOFF_YEAR;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearGroup {
    /// `"2025"`, or `"2030+"` for the trailing capped group.
    pub label: String,
    pub launches: Vec<LaunchRecord>,
}

/// Groups records by launch year, ascending, with everything at or past the
/// cutoff year in one trailing group. Records keep their input order within
/// a group.
pub fn group_by_year(launches: &[LaunchRecord]) -> Vec<YearGroup> {
    let mut by_year: BTreeMap<i32, Vec<LaunchRecord>> = BTreeMap::new();
    let mut capped: Vec<LaunchRecord> = Vec::new();

    for launch in launches {
        if launch.year >= CUTOFF_YEAR {
            capped.push(launch.clone());
        } else {
            by_year.entry(launch.year).or_default().push(launch.clone());
        }
    }

    let mut groups: Vec<YearGroup> = by_year
        .into_iter()
        .map(|(year, launches)| YearGroup {
            label: year.to_string(),
            launches,
        })
        .collect();
    if !capped.is_empty() {
        groups.push(YearGroup {
            label: format!("{CUTOFF_YEAR}+"),
            launches: capped,
        });
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Region;

    fn launch(id: &str, year: i32) -> LaunchRecord {
        LaunchRecord {
            id: id.into(),
            product_name: id.into(),
            base_product_name: id.into(),
            year,
            month: 1,
            day: 1,
            region: Region::US,
            category: "Test".into(),
            description: None,
            strategy_kickoff_date: "2024-01-01".into(),
            market_readout_date: "2024-06-01".into(),
        }
    }

    #[test]
    fn test_groups_ascending_with_capped_last() {
        let launches = vec![
            launch("c", 2031),
            launch("a", 2026),
            launch("b", 2024),
            launch("d", 2033),
            launch("e", 2026),
        ];
        let groups = group_by_year(&launches);
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["2024", "2026", "2030+"]);
        assert_eq!(groups[1].launches.len(), 2);
        assert_eq!(groups[2].launches.len(), 2);
        // Input order preserved inside the capped group.
        assert_eq!(groups[2].launches[0].id, "c");
    }

    #[test]
    fn test_no_capped_group_without_capped_years() {
        let groups = group_by_year(&[launch("a", 2025)]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, "2025");
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_year(&[]).is_empty());
    }
}
