// ABOUTME: Time-series normalizer turning raw record messages into ordered sample points
// ABOUTME: Sorts by timestamp, derives relative time and clipped non-negative per-sample deltas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Time-Series Normalizer
//!
//! Device clocks can emit samples out of order, so records are sorted by
//! timestamp before any time arithmetic. Relative time is measured from the
//! earliest timestamp; when no record carries a timestamp the positional index
//! is used instead. Deltas are forward differences clipped at zero, which
//! makes them safe weights for time integration.

use capyrun_core::formatters::pace_seconds_per_km;
use capyrun_core::models::{RawRecord, SamplePoint};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Normalize raw records into the ordered sample sequence.
///
/// Records without a timestamp are placed after the timestamped ones, in
/// their original order, and inherit the previous relative time.
#[must_use]
pub fn normalize(records: &[RawRecord]) -> Vec<SamplePoint> {
    let mut ordered: Vec<&RawRecord> = records.iter().collect();
    ordered.sort_by_key(|record| (record.timestamp.is_none(), record.timestamp));

    let origin = ordered.first().and_then(|record| record.timestamp);
    let relative = relative_times(&ordered, origin);

    let mut previous: Option<f64> = None;
    let samples: Vec<SamplePoint> = ordered
        .iter()
        .zip(relative)
        .map(|(record, relative_seconds)| {
            let delta_seconds = previous.map_or(0.0, |prev| (relative_seconds - prev).max(0.0));
            previous = Some(relative_seconds);
            SamplePoint {
                absolute_time: record.timestamp,
                relative_seconds,
                delta_seconds,
                heart_rate: record.heart_rate,
                speed: record.speed,
                cadence: record.cadence,
                power: record.power,
                elevation: record.altitude,
                cumulative_distance: record.distance,
                pace_seconds_per_km: record.speed.and_then(pace_seconds_per_km),
            }
        })
        .collect();

    debug!(
        samples = samples.len(),
        timestamped = origin.is_some(),
        "Normalized record stream"
    );
    samples
}

fn relative_times(ordered: &[&RawRecord], origin: Option<DateTime<Utc>>) -> Vec<f64> {
    let Some(origin) = origin else {
        return (0..ordered.len()).map(|index| index as f64).collect();
    };

    let mut last = 0.0;
    ordered
        .iter()
        .map(|record| {
            if let Some(ts) = record.timestamp {
                last = (ts - origin).num_milliseconds() as f64 / 1000.0;
            }
            last
        })
        .collect()
}
