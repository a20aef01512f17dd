//! Coordinate normalization
//!
//! The canonical in-memory and wire convention is `[latitude, longitude]`.
//! Some producers store `(longitude, latitude)` instead; [`normalize`] repairs
//! the common swap case without a schema change. Pairs that cannot be repaired
//! are passed through untouched rather than rejected.

use serde::{Deserialize, Serialize};

/// A `[latitude, longitude]` pair, serialized as a two-element JSON array
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng(pub f64, pub f64);

impl LatLng {
    pub fn lat(&self) -> f64 {
        self.0
    }

    pub fn lng(&self) -> f64 {
        self.1
    }

    /// Normalized copy of this pair
    pub fn normalized(self) -> LatLng {
        normalize(self.0, self.1)
    }
}

impl From<[f64; 2]> for LatLng {
    fn from(pair: [f64; 2]) -> Self {
        LatLng(pair[0], pair[1])
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(pair: LatLng) -> Self {
        [pair.0, pair.1]
    }
}

pub fn is_valid_latitude(value: f64) -> bool {
    value.is_finite() && (-90.0..=90.0).contains(&value)
}

pub fn is_valid_longitude(value: f64) -> bool {
    value.is_finite() && (-180.0..=180.0).contains(&value)
}

/// Disambiguate a coordinate pair into `[lat, lng]`
///
/// 1. `a` valid latitude and `b` valid longitude: unchanged.
/// 2. `b` valid latitude and `a` valid longitude: swapped.
/// 3. Otherwise unchanged; nothing can be corrected.
pub fn normalize(a: f64, b: f64) -> LatLng {
    if is_valid_latitude(a) && is_valid_longitude(b) {
        LatLng(a, b)
    } else if is_valid_latitude(b) && is_valid_longitude(a) {
        LatLng(b, a)
    } else {
        LatLng(a, b)
    }
}

/// Null-aware variant used when reading separate scalar columns
///
/// Yields `None` when either component is missing.
pub fn normalize_optional(a: Option<f64>, b: Option<f64>) -> Option<LatLng> {
    match (a, b) {
        (Some(a), Some(b)) => Some(normalize(a, b)),
        _ => None,
    }
}
