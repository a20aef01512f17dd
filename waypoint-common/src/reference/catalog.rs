//! Continents and the achievement catalog
//!
//! Declaration order is significant: unlocked achievements are reported in it.

use super::{Achievement, Continent};

pub static CONTINENTS: &[Continent] = &[
    Continent { id: "africa", name: "Africa", color: "#f59e0b" },
    Continent { id: "asia", name: "Asia", color: "#ef4444" },
    Continent { id: "europe", name: "Europe", color: "#3b82f6" },
    Continent { id: "north-america", name: "North America", color: "#10b981" },
    Continent { id: "south-america", name: "South America", color: "#8b5cf6" },
    Continent { id: "oceania", name: "Oceania", color: "#06b6d4" },
];

const fn global(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    requirement: u32,
) -> Achievement {
    Achievement {
        id,
        name,
        description,
        requirement,
        continent_id: None,
    }
}

const fn continental(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    requirement: u32,
    continent_id: &'static str,
) -> Achievement {
    Achievement {
        id,
        name,
        description,
        requirement,
        continent_id: Some(continent_id),
    }
}

pub static ACHIEVEMENTS: &[Achievement] = &[
    global("first-steps", "First Steps", "Visit your first country", 1),
    global("explorer", "Explorer", "Visit 5 countries", 5),
    global("adventurer", "Adventurer", "Visit 10 countries", 10),
    global("globetrotter", "Globetrotter", "Visit 25 countries", 25),
    global("world-traveler", "World Traveler", "Visit 50 countries", 50),
    global("centurion", "Centurion", "Visit 100 countries", 100),
    global("completionist", "Completionist", "Visit every country in the world", 195),
    continental("safari-seeker", "Safari Seeker", "Visit 5 countries in Africa", 5, "africa"),
    continental("silk-road", "Silk Road Traveler", "Visit 5 countries in Asia", 5, "asia"),
    continental("euro-tripper", "Euro Tripper", "Visit 5 countries in Europe", 5, "europe"),
    continental("north-star", "North Star", "Visit 3 countries in North America", 3, "north-america"),
    continental("andes-explorer", "Andes Explorer", "Visit 3 countries in South America", 3, "south-america"),
    continental("island-hopper", "Island Hopper", "Visit 3 countries in Oceania", 3, "oceania"),
    continental("pan-african", "Pan-African", "Visit every country in Africa", 54, "africa"),
    continental("asia-complete", "Asia Complete", "Visit every country in Asia", 48, "asia"),
    continental("europe-complete", "Europe Complete", "Visit every country in Europe", 44, "europe"),
    continental("americas-north-complete", "North America Complete", "Visit every country in North America", 23, "north-america"),
    continental("americas-south-complete", "South America Complete", "Visit every country in South America", 12, "south-america"),
    continental("oceania-complete", "Oceania Complete", "Visit every country in Oceania", 14, "oceania"),
];
