// ABOUTME: Physiological ranges and tunable policy tables for the metrics pipeline
// ABOUTME: Keeps thresholds and proportion vectors as data so tests can assert against them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by the pipeline stage that consumes them.
//!
//! Values in [`plan`] and [`load_model`] are practitioner heuristics, not
//! clinically validated physiology; treat them as tunable policy.

/// Heart-rate plausibility ranges
pub mod heart_rate {
    /// Lowest accepted zone boundary (bpm)
    pub const ZONE_BOUND_MIN_BPM: u32 = 30;

    /// Highest accepted zone boundary (bpm)
    pub const ZONE_BOUND_MAX_BPM: u32 = 240;

    /// Expected resting heart-rate range (bpm)
    pub const RESTING_HR_RANGE: (u32, u32) = (30, 100);

    /// Expected maximum heart-rate range (bpm)
    pub const MAX_HR_RANGE: (u32, u32) = (140, 230);

    /// Default resting heart rate when none is configured
    pub const DEFAULT_RESTING_HR: u32 = 60;

    /// Default maximum heart rate when none is configured
    pub const DEFAULT_MAX_HR: u32 = 190;

    /// Default zone boundaries (5 bounds, 6 zones)
    pub const DEFAULT_ZONE_BOUNDS: [u32; 5] = [120, 140, 155, 170, 185];
}

/// Metric engine thresholds
pub mod metrics {
    /// TRIMP scale factor applied to the summed reserve-minutes
    pub const TRIMP_SCALE: f64 = 100.0;

    /// Minimum valid (speed > 0, hr > 0) samples for decoupling
    pub const DECOUPLING_MIN_SAMPLES: usize = 40;

    /// Minimum valid samples in each half for decoupling
    pub const DECOUPLING_MIN_HALF_SAMPLES: usize = 20;

    /// Speed above which a sample counts as moving (m/s)
    pub const MOVING_SPEED_THRESHOLD_MPS: f64 = 0.5;

    /// Elevation deltas below this are sensor jitter (m)
    pub const ELEVATION_JITTER_M: f64 = 0.5;

    /// Elevation deltas above this between adjacent samples are spikes (m)
    pub const ELEVATION_SPIKE_M: f64 = 20.0;

    /// Scaling constant of the pace-stability surrogate score.
    ///
    /// Arbitrary and unvalidated: a coefficient of variation of 0.2 maps to 0.
    pub const PACE_STABILITY_SCALE: f64 = 5.0;
}

/// Exponential load model
pub mod load_model {
    /// Acute training load time constant (days)
    pub const ATL_TAU_DAYS: f64 = 7.0;

    /// Chronic training load time constant (days)
    pub const CTL_TAU_DAYS: f64 = 42.0;

    /// Length of the trailing window used for weekly totals (days)
    pub const TRAILING_WINDOW_DAYS: usize = 7;
}

/// Next-week plan drafting policy
pub mod plan {
    /// TSB below this drafts a deload week
    pub const TSB_DELOAD_BELOW: f64 = -10.0;

    /// TSB above this drafts a progressive week
    pub const TSB_PROGRESS_ABOVE: f64 = 10.0;

    /// Weekly volume multiplier for a deload week
    pub const DELOAD_MULTIPLIER: f64 = 0.9;

    /// Weekly volume multiplier for a maintenance week
    pub const MAINTENANCE_MULTIPLIER: f64 = 1.05;

    /// Weekly volume multiplier for a progressive week
    pub const PROGRESSIVE_MULTIPLIER: f64 = 1.10;

    /// Share of the weekly target per day, Monday through Sunday
    pub const DAY_PROPORTIONS: [f64; 7] = [0.12, 0.16, 0.10, 0.18, 0.08, 0.26, 0.10];

    /// English weekday names, Monday first
    pub const DAY_NAMES: [&str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];
}

/// Report limits applied by callers, not by the core
pub mod report {
    /// Default number of sample rows handed to display/export collaborators
    pub const DEFAULT_RECORD_DISPLAY_LIMIT: usize = 500;
}
