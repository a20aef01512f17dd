//! Achievement evaluation
//!
//! Unlocked status is a pure function of the status map; nothing is stored.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::TravelStatus;
use crate::reference::{Achievement, ACHIEVEMENTS};
use crate::stats::{compute_stats, Stats};

/// Whether an achievement is satisfied by the given stats
pub fn is_unlocked(achievement: &Achievement, stats: &Stats) -> bool {
    let visited = match achievement.continent_id {
        Some(continent_id) => stats
            .continent(continent_id)
            .map(|c| c.visited)
            .unwrap_or(0),
        None => stats.visited,
    };
    visited >= achievement.requirement
}

/// Unlocked achievements for precomputed stats, in catalog order
pub fn unlocked_for_stats(stats: &Stats) -> Vec<&'static Achievement> {
    ACHIEVEMENTS
        .iter()
        .filter(|a| is_unlocked(a, stats))
        .collect()
}

/// Unlocked achievements for a status map, in catalog order
pub fn unlocked_achievements(statuses: &BTreeMap<String, TravelStatus>) -> Vec<&'static Achievement> {
    unlocked_for_stats(&compute_stats(statuses))
}

/// Detects newly unlocked achievements across successive evaluations
///
/// The first observation only records a baseline, so achievements already
/// unlocked when tracking starts never produce a notification.
#[derive(Debug, Default)]
pub struct UnlockTracker {
    seen: Option<BTreeSet<&'static str>>,
}

impl UnlockTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current unlocked set and return what is new since last time
    pub fn observe(&mut self, unlocked: &[&'static Achievement]) -> Vec<&'static Achievement> {
        let current: BTreeSet<&'static str> = unlocked.iter().map(|a| a.id).collect();
        let fresh = match &self.seen {
            None => Vec::new(),
            Some(seen) => unlocked
                .iter()
                .filter(|a| !seen.contains(a.id))
                .copied()
                .collect(),
        };
        // Re-locking (e.g. a country cleared) lets the achievement notify again later
        self.seen = Some(current);
        fresh
    }

    pub fn has_baseline(&self) -> bool {
        self.seen.is_some()
    }
}
