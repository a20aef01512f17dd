//! Static reference dataset
//!
//! Countries, continents and achievement definitions fixed at build time.
//! Nothing here is mutated at runtime.

mod catalog;
mod countries;

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

pub use catalog::{ACHIEVEMENTS, CONTINENTS};
pub use countries::COUNTRIES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: &'static str,
    pub name: &'static str,
    pub capital: &'static str,
    pub continent_id: &'static str,
    #[serde(rename = "flagGlyph")]
    pub flag: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Continent {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "displayColor")]
    pub color: &'static str,
}

/// Achievement definition; unlocked status is always derived, never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub requirement: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continent_id: Option<&'static str>,
}

static COUNTRY_INDEX: Lazy<HashMap<&'static str, &'static Country>> =
    Lazy::new(|| COUNTRIES.iter().map(|c| (c.id, c)).collect());

/// Look up a country by id
pub fn country(id: &str) -> Option<&'static Country> {
    COUNTRY_INDEX.get(id).copied()
}

/// Look up a continent by id
pub fn continent(id: &str) -> Option<&'static Continent> {
    CONTINENTS.iter().find(|c| c.id == id)
}

/// Countries belonging to a continent, in catalog order
pub fn countries_in(continent_id: &str) -> impl Iterator<Item = &'static Country> + '_ {
    COUNTRIES.iter().filter(move |c| c.continent_id == continent_id)
}

pub fn achievement(id: &str) -> Option<&'static Achievement> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}

pub fn total_countries() -> usize {
    COUNTRIES.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size() {
        assert_eq!(total_countries(), 195);
        assert_eq!(CONTINENTS.len(), 6);
    }

    #[test]
    fn test_country_ids_unique() {
        let ids: HashSet<&str> = COUNTRIES.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), COUNTRIES.len());
    }

    #[test]
    fn test_every_country_belongs_to_known_continent() {
        for c in COUNTRIES {
            assert!(continent(c.continent_id).is_some(), "{} has unknown continent", c.id);
        }
    }

    #[test]
    fn test_continents_partition_catalog() {
        let sum: usize = CONTINENTS.iter().map(|c| countries_in(c.id).count()).sum();
        assert_eq!(sum, COUNTRIES.len());
        for c in CONTINENTS {
            assert!(countries_in(c.id).count() > 0, "{} is empty", c.id);
        }
    }

    #[test]
    fn test_lookup() {
        let fr = country("FR").unwrap();
        assert_eq!(fr.name, "France");
        assert_eq!(fr.capital, "Paris");
        assert_eq!(fr.continent_id, "europe");
        assert_eq!(fr.flag, "🇫🇷");
        assert!(country("XX").is_none());
    }

    #[test]
    fn test_achievement_continents_exist() {
        for a in ACHIEVEMENTS {
            if let Some(cid) = a.continent_id {
                let c = continent(cid).unwrap();
                assert!(a.requirement as usize <= countries_in(c.id).count(), "{} unreachable", a.id);
            }
        }
        let ids: HashSet<&str> = ACHIEVEMENTS.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), ACHIEVEMENTS.len());
    }

    #[test]
    fn test_country_serializes_with_wire_names() {
        let json = serde_json::to_value(country("JP").unwrap()).unwrap();
        assert_eq!(json["continentId"], "asia");
        assert_eq!(json["flagGlyph"], "🇯🇵");
    }
}
