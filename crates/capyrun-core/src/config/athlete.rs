// ABOUTME: Athlete configuration: resting and maximum heart rate plus zone boundaries
// ABOUTME: Loaded from environment with defaults; passed explicitly into every metric call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::heart_rate::{
    DEFAULT_MAX_HR, DEFAULT_RESTING_HR, DEFAULT_ZONE_BOUNDS, MAX_HR_RANGE, RESTING_HR_RANGE,
    ZONE_BOUND_MAX_BPM, ZONE_BOUND_MIN_BPM,
};
use crate::errors::{AppError, AppResult};

/// Per-athlete parameters supplied by the caller.
///
/// The core never stores this; it is threaded as a parameter into each
/// summarization call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteConfig {
    /// Resting heart rate (bpm)
    pub hr_rest: u32,
    /// Maximum heart rate (bpm)
    pub hr_max: u32,
    /// Ascending zone boundaries (bpm); n bounds define n + 1 zones
    pub zone_bounds: Vec<u32>,
}

impl Default for AthleteConfig {
    fn default() -> Self {
        Self {
            hr_rest: DEFAULT_RESTING_HR,
            hr_max: DEFAULT_MAX_HR,
            zone_bounds: DEFAULT_ZONE_BOUNDS.to_vec(),
        }
    }
}

impl AthleteConfig {
    /// Create a configuration from explicit values, cleaning the zone bounds
    #[must_use]
    pub fn new(hr_rest: u32, hr_max: u32, zone_bounds: &[u32]) -> Self {
        Self {
            hr_rest,
            hr_max,
            zone_bounds: clean_bounds(zone_bounds.iter().copied()),
        }
    }

    /// Load athlete configuration from environment
    ///
    /// Reads `CAPYRUN_HR_REST`, `CAPYRUN_HR_MAX` and `CAPYRUN_ZONE_BOUNDS`.
    /// Unparsable values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            hr_rest: env::var("CAPYRUN_HR_REST")
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_RESTING_HR),
            hr_max: env::var("CAPYRUN_HR_MAX")
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_MAX_HR),
            zone_bounds: env::var("CAPYRUN_ZONE_BOUNDS")
                .ok()
                .map_or_else(|| DEFAULT_ZONE_BOUNDS.to_vec(), |s| parse_zone_bounds(&s)),
        }
    }

    /// Replace the zone bounds with the parsed form of `text`
    #[must_use]
    pub fn with_zone_text(mut self, text: &str) -> Self {
        self.zone_bounds = parse_zone_bounds(text);
        self
    }

    /// Check the heart-rate values against their expected ranges
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `CONFIG_INVALID` when resting or maximum heart
    /// rate is outside its expected range. The ranges do not overlap, so a
    /// config that passes both checks always has `hr_max > hr_rest`.
    pub fn validate(&self) -> AppResult<()> {
        let (rest_lo, rest_hi) = RESTING_HR_RANGE;
        if !(rest_lo..=rest_hi).contains(&self.hr_rest) {
            return Err(AppError::config_invalid(format!(
                "Resting heart rate must be between {rest_lo} and {rest_hi} bpm, got {}",
                self.hr_rest
            )));
        }
        let (max_lo, max_hi) = MAX_HR_RANGE;
        if !(max_lo..=max_hi).contains(&self.hr_max) {
            return Err(AppError::config_invalid(format!(
                "Maximum heart rate must be between {max_lo} and {max_hi} bpm, got {}",
                self.hr_max
            )));
        }
        Ok(())
    }
}

/// Parse user-entered zone boundaries such as `"120, 140,155,170,185"`.
///
/// Unparsable and out-of-range tokens are dropped rather than rejecting the
/// whole input. The result is sorted ascending without duplicates and may be
/// empty, in which case zone-time is skipped.
#[must_use]
pub fn parse_zone_bounds(text: &str) -> Vec<u32> {
    let parsed = text
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            token
                .parse::<u32>()
                .inspect_err(|_| debug!(token, "dropping unparsable zone bound"))
                .ok()
        });
    clean_bounds(parsed)
}

fn clean_bounds(values: impl Iterator<Item = u32>) -> Vec<u32> {
    let mut bounds: Vec<u32> = values
        .filter(|value| {
            let plausible = (ZONE_BOUND_MIN_BPM..=ZONE_BOUND_MAX_BPM).contains(value);
            if !plausible {
                debug!(value, "dropping out-of-range zone bound");
            }
            plausible
        })
        .collect();
    bounds.sort_unstable();
    bounds.dedup();
    bounds
}
