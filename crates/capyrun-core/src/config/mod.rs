// ABOUTME: Configuration types shared across the workspace
// ABOUTME: Contains the athlete configuration threaded into every metric computation

/// Athlete heart-rate configuration and zone-bound parsing
pub mod athlete;

pub use athlete::{parse_zone_bounds, AthleteConfig};
