//! Travel progress aggregation
//!
//! Pure functions over a status map and the fixed reference dataset.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::TravelStatus;
use crate::reference::{self, CONTINENTS};

/// Progress within one continent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContinentProgress {
    pub visited: u32,
    pub total: u32,
    pub percentage: u32,
}

/// Global progress with a per-continent breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub visited: u32,
    pub bucket_list: u32,
    pub lived: u32,
    pub total: u32,
    pub percentage: u32,
    /// Keyed by continent id, one entry per continent in the dataset
    pub continent_stats: BTreeMap<&'static str, ContinentProgress>,
}

impl Stats {
    pub fn continent(&self, continent_id: &str) -> Option<&ContinentProgress> {
        self.continent_stats.get(continent_id)
    }
}

/// Rounded share of `part` in `total`, 0 when `total` is 0
pub fn percentage(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    // f64::round rounds half away from zero, i.e. half-up for non-negative values
    ((part as f64 / total as f64) * 100.0).round() as u32
}

/// Compute visited/bucket-list/lived counts globally and per continent
///
/// Status keys that do not name a reference country are ignored.
pub fn compute_stats(statuses: &BTreeMap<String, TravelStatus>) -> Stats {
    let status_of = |id: &str| statuses.get(id).copied().unwrap_or_default();

    let mut visited = 0;
    let mut bucket_list = 0;
    let mut lived = 0;
    for country in reference::COUNTRIES {
        match status_of(country.id) {
            TravelStatus::Visited => visited += 1,
            TravelStatus::Lived => {
                visited += 1;
                lived += 1;
            }
            TravelStatus::BucketList => bucket_list += 1,
            TravelStatus::None => {}
        }
    }

    let continent_stats = CONTINENTS
        .iter()
        .map(|continent| {
            let (visited, total) = reference::countries_in(continent.id).fold(
                (0u32, 0u32),
                |(visited, total), country| {
                    let hit = status_of(country.id).counts_as_visited() as u32;
                    (visited + hit, total + 1)
                },
            );
            (
                continent.id,
                ContinentProgress {
                    visited,
                    total,
                    percentage: percentage(visited, total),
                },
            )
        })
        .collect();

    let total = reference::total_countries() as u32;
    Stats {
        visited,
        bucket_list,
        lived,
        total,
        percentage: percentage(visited, total),
        continent_stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::COUNTRIES;

    fn statuses(entries: &[(&str, TravelStatus)]) -> BTreeMap<String, TravelStatus> {
        entries.iter().map(|(id, s)| (id.to_string(), *s)).collect()
    }

    #[test]
    fn test_empty_map() {
        let stats = compute_stats(&BTreeMap::new());
        assert_eq!(stats.visited, 0);
        assert_eq!(stats.total, 195);
        assert_eq!(stats.percentage, 0);
        assert_eq!(stats.continent_stats.len(), CONTINENTS.len());
        assert!(stats.continent_stats.values().all(|c| c.visited == 0 && c.total > 0));
    }

    #[test]
    fn test_counts_by_status() {
        let stats = compute_stats(&statuses(&[
            ("FR", TravelStatus::Visited),
            ("JP", TravelStatus::Lived),
            ("PE", TravelStatus::BucketList),
            ("KE", TravelStatus::None),
        ]));
        assert_eq!(stats.visited, 2);
        assert_eq!(stats.lived, 1);
        assert_eq!(stats.bucket_list, 1);
        assert_eq!(stats.continent("europe").unwrap().visited, 1);
        assert_eq!(stats.continent("asia").unwrap().visited, 1);
        assert_eq!(stats.continent("south-america").unwrap().visited, 0);
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(49, 195), 25);
        assert_eq!(percentage(1, 195), 1);
        assert_eq!(percentage(1, 8), 13); // 12.5 rounds up
        assert_eq!(percentage(195, 195), 100);
        assert_eq!(percentage(3, 0), 0);
    }

    #[test]
    fn test_forty_nine_visited_is_25_percent() {
        let map: BTreeMap<String, TravelStatus> = COUNTRIES
            .iter()
            .take(49)
            .map(|c| (c.id.to_string(), TravelStatus::Visited))
            .collect();
        let stats = compute_stats(&map);
        assert_eq!(stats.visited, 49);
        assert_eq!(stats.percentage, 25);
    }

    #[test]
    fn test_continent_visits_sum_to_global() {
        let map: BTreeMap<String, TravelStatus> = COUNTRIES
            .iter()
            .enumerate()
            .filter(|(i, _)| i % 3 != 0)
            .map(|(i, c)| {
                let status = if i % 2 == 0 { TravelStatus::Lived } else { TravelStatus::Visited };
                (c.id.to_string(), status)
            })
            .collect();
        let stats = compute_stats(&map);
        let sum: u32 = stats.continent_stats.values().map(|c| c.visited).sum();
        assert_eq!(sum, stats.visited);
        assert!(stats.percentage <= 100);
    }

    #[test]
    fn test_dangling_keys_ignored() {
        let stats = compute_stats(&statuses(&[("XX", TravelStatus::Visited)]));
        assert_eq!(stats.visited, 0);
    }
}
