// ABOUTME: Workout summary (one per decoded file) and heart-rate zone time rows
// ABOUTME: The summary is the unit handed to persistence and aggregated across files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Canonical per-file output of the pipeline.
///
/// Missing metrics stay `None` and must be rendered as "no data", never as a
/// defaulted zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Activity start
    pub start_time: Option<DateTime<Utc>>,
    /// Date component of `start_time`; `None` excludes the summary from trends
    pub calendar_date: Option<NaiveDate>,
    /// Sport, from the session message only
    pub sport: Option<String>,
    /// Sub-sport, from the session message only
    pub sub_sport: Option<String>,
    /// Distance (km, 2 decimals)
    pub distance_km: Option<f64>,
    /// Duration (whole seconds)
    pub duration_seconds: Option<u64>,
    /// Duration (minutes, 1 decimal)
    pub duration_minutes: Option<f64>,
    /// Duration as `H:MM:SS` or `M:SS`
    pub duration_display: Option<String>,
    /// Moving time (whole seconds)
    pub moving_time_seconds: Option<u64>,
    /// Average heart rate (bpm, rounded)
    pub average_hr: Option<u32>,
    /// Maximum heart rate (bpm, rounded)
    pub max_hr: Option<u32>,
    /// Average pace as `M:SS` per km
    pub avg_pace: Option<String>,
    /// Time-weighted training impulse
    pub trimp: Option<f64>,
    /// Efficiency factor, speed over heart rate (4 decimals)
    pub efficiency_factor: Option<f64>,
    /// Aerobic decoupling Pa:Hr in percent (1 decimal)
    pub decoupling_percent: Option<f64>,
    /// Elevation gain (m)
    pub elevation_gain_m: Option<f64>,
    /// Elevation loss (m)
    pub elevation_loss_m: Option<f64>,
    /// Average power (W)
    pub avg_power: Option<f64>,
    /// Calories (kcal)
    pub calories: Option<u32>,
    /// Number of lap messages in the file
    pub laps_count: usize,
}

impl WorkoutSummary {
    /// Whether the summary can be placed on a training timeline
    #[must_use]
    pub const fn is_dated(&self) -> bool {
        self.calendar_date.is_some()
    }
}

/// Seconds spent in one heart-rate zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneTime {
    /// Zone label, `Z1` for the lowest
    pub zone: String,
    /// Exclusive lower bound (bpm); `None` for the open bottom zone
    pub lower_bpm: Option<u32>,
    /// Inclusive upper bound (bpm); `None` for the open top zone
    pub upper_bpm: Option<u32>,
    /// Time in zone (s)
    pub seconds: f64,
    /// Share of zoned time (percent, 1 decimal)
    pub percent: f64,
}
