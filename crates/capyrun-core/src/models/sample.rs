// ABOUTME: Per-sample models: raw decoded record messages and normalized sample points
// ABOUTME: Raw records are discarded after normalization; sample points live for one summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One decoded `record` message, in device order.
///
/// Fields are sparse and device-dependent. Speed and altitude already carry
/// the enhanced-field fallback applied by the reader.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Absolute sample time
    pub timestamp: Option<DateTime<Utc>>,
    /// Heart rate (bpm)
    pub heart_rate: Option<f64>,
    /// Speed (m/s)
    pub speed: Option<f64>,
    /// Cadence (rpm, or strides/min for running)
    pub cadence: Option<f64>,
    /// Power (W)
    pub power: Option<f64>,
    /// Altitude (m)
    pub altitude: Option<f64>,
    /// Cumulative distance since the start (m)
    pub distance: Option<f64>,
}

/// One entry of the normalized, time-ordered sample sequence.
///
/// `relative_seconds` is non-decreasing along the sequence and
/// `delta_seconds` is never negative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// Absolute sample time, if the device reported one
    pub absolute_time: Option<DateTime<Utc>>,
    /// Seconds since the earliest timestamp (or positional index)
    pub relative_seconds: f64,
    /// Clipped gap to the previous sample; 0 for the first sample
    pub delta_seconds: f64,
    /// Heart rate (bpm)
    pub heart_rate: Option<f64>,
    /// Speed (m/s)
    pub speed: Option<f64>,
    /// Cadence (rpm)
    pub cadence: Option<f64>,
    /// Power (W)
    pub power: Option<f64>,
    /// Elevation (m)
    pub elevation: Option<f64>,
    /// Cumulative distance (m)
    pub cumulative_distance: Option<f64>,
    /// Pace in seconds per kilometre, absent when not moving
    pub pace_seconds_per_km: Option<f64>,
}

impl SamplePoint {
    /// Heart rate and speed as a pair when both are present
    #[must_use]
    pub fn speed_hr_pair(&self) -> Option<(f64, f64)> {
        Some((self.speed?, self.heart_rate?))
    }
}
