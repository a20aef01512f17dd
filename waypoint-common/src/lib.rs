//! # Waypoint Common Library
//!
//! Shared code for the Waypoint tracker and API service including:
//! - Coordinate normalization
//! - The static reference dataset (countries, continents, achievements)
//! - Domain models with create/patch input types
//! - Derived statistics, achievement evaluation and timelines
//! - Configuration loading
//! - Id and timestamp utilities

pub mod achievements;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod models;
pub mod reference;
pub mod stats;
pub mod time;
pub mod timeline;

pub use error::{Error, Result};
pub use geo::LatLng;
pub use models::TravelStatus;
