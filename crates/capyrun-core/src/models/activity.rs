// ABOUTME: Lap and session message models plus the decoded activity container
// ABOUTME: Session fields are device-authoritative and take priority over record-derived values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RawRecord;

/// One lap / interval boundary reported by the device
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LapRecord {
    /// Wall-clock start of the lap
    pub start_time: Option<DateTime<Utc>>,
    /// Lap distance (m)
    pub total_distance_m: Option<f64>,
    /// Lap timer time (s)
    pub total_time_s: Option<f64>,
    /// Average heart rate (bpm)
    pub avg_hr: Option<f64>,
    /// Maximum heart rate (bpm)
    pub max_hr: Option<f64>,
    /// Average speed (m/s)
    pub avg_speed: Option<f64>,
    /// Maximum speed (m/s)
    pub max_speed: Option<f64>,
    /// Average cadence (rpm)
    pub avg_cadence: Option<f64>,
    /// Total ascent (m)
    pub ascent_m: Option<f64>,
    /// Total descent (m)
    pub descent_m: Option<f64>,
    /// What closed the lap (manual, distance, time, ...)
    pub trigger_kind: Option<String>,
}

/// Per-activity totals reported by the device itself
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Wall-clock start of the activity
    pub start_time: Option<DateTime<Utc>>,
    /// Sport name as reported by the device
    pub sport: Option<String>,
    /// Sub-sport name as reported by the device
    pub sub_sport: Option<String>,
    /// Total distance (m)
    pub total_distance_m: Option<f64>,
    /// Total elapsed time including pauses (s)
    pub total_elapsed_time_s: Option<f64>,
    /// Total timer time excluding pauses (s)
    pub total_timer_time_s: Option<f64>,
    /// Average heart rate (bpm)
    pub avg_hr: Option<f64>,
    /// Maximum heart rate (bpm)
    pub max_hr: Option<f64>,
    /// Average speed (m/s)
    pub avg_speed: Option<f64>,
    /// Maximum speed (m/s)
    pub max_speed: Option<f64>,
    /// Average cadence (rpm)
    pub avg_cadence: Option<f64>,
    /// Total ascent (m)
    pub ascent_m: Option<f64>,
    /// Total descent (m)
    pub descent_m: Option<f64>,
    /// Average power (W)
    pub avg_power: Option<f64>,
    /// Maximum power (W)
    pub max_power: Option<f64>,
    /// Total calories (kcal)
    pub calories: Option<f64>,
}

impl SessionRecord {
    /// Timer time when reported, elapsed time otherwise
    #[must_use]
    pub fn duration_seconds(&self) -> Option<f64> {
        self.total_timer_time_s.or(self.total_elapsed_time_s)
    }
}

/// The three typed message streams decoded from one FIT file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitActivity {
    /// Per-sample `record` messages, in file order
    pub records: Vec<RawRecord>,
    /// `lap` messages, ordered by start time
    pub laps: Vec<LapRecord>,
    /// `session` messages, in file order (usually one)
    pub sessions: Vec<SessionRecord>,
}

impl FitActivity {
    /// The session whose totals are authoritative for the summary
    #[must_use]
    pub fn primary_session(&self) -> Option<&SessionRecord> {
        self.sessions.first()
    }
}
