// ABOUTME: Per-lap interval compliance against heart-rate, speed, or power target bands
// ABOUTME: Falls back to a labeled pace-stability heuristic when a lap has no target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Interval compliance.
//!
//! Each lap owns the samples whose absolute time lies in
//! `[lap_start, next_lap_start)`. The last lap ends at `lap_start +
//! total_time_s` when the device reported a lap time, and is open-ended
//! otherwise.
//!
//! With a target, the score is the time-weighted share of the window spent
//! inside the band. Without one, a pace-stability surrogate is reported
//! instead. The surrogate is an unvalidated heuristic with an arbitrary
//! scaling constant; it is labeled [`ComplianceKind::PaceStabilitySurrogate`]
//! so reports never present it as measured compliance.

use capyrun_core::constants::metrics::PACE_STABILITY_SCALE;
use capyrun_core::models::{LapRecord, SamplePoint};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Quantity a target band is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetMetric {
    /// Heart rate (bpm)
    HeartRate,
    /// Speed (m/s)
    Speed,
    /// Power (W)
    Power,
}

impl TargetMetric {
    fn value_of(self, sample: &SamplePoint) -> Option<f64> {
        match self {
            Self::HeartRate => sample.heart_rate,
            Self::Speed => sample.speed,
            Self::Power => sample.power,
        }
    }
}

/// Prescribed band for one lap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalTarget {
    /// Quantity the band applies to
    pub metric: TargetMetric,
    /// Inclusive lower edge
    pub low: f64,
    /// Inclusive upper edge
    pub high: f64,
}

impl IntervalTarget {
    /// Whether `value` lies inside the band
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

/// How a lap score was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceKind {
    /// Share of time inside an explicit target band
    Measured,
    /// Heuristic pace-stability score, not a measured compliance value
    PaceStabilitySurrogate,
}

/// Compliance result for one lap window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapCompliance {
    /// Position of the lap in start-time order
    pub lap_index: usize,
    /// Lap start
    pub start_time: Option<DateTime<Utc>>,
    /// Lap timer time, else the sampled window span (s)
    pub duration_seconds: Option<f64>,
    /// 0-100 score; `None` when the window holds no usable data
    pub score: Option<f64>,
    /// Measured or surrogate
    pub kind: ComplianceKind,
}

/// Score every lap.
///
/// `targets[i]` applies to `laps[i]`; laps beyond the end of `targets` use the
/// pace-stability surrogate.
#[must_use]
pub fn interval_compliance(
    samples: &[SamplePoint],
    laps: &[LapRecord],
    targets: &[IntervalTarget],
) -> Vec<LapCompliance> {
    laps.iter()
        .enumerate()
        .map(|(lap_index, lap)| {
            let next_start = laps.get(lap_index + 1).and_then(|next| next.start_time);
            let window = lap_window(samples, lap, next_start);
            let (score, kind) = targets.get(lap_index).map_or_else(
                || {
                    (
                        pace_stability_score(&window),
                        ComplianceKind::PaceStabilitySurrogate,
                    )
                },
                |target| (target_share(&window, target), ComplianceKind::Measured),
            );
            LapCompliance {
                lap_index,
                start_time: lap.start_time,
                duration_seconds: lap.total_time_s.or_else(|| window_span(&window)),
                score,
                kind,
            }
        })
        .collect()
}

fn lap_window<'a>(
    samples: &'a [SamplePoint],
    lap: &LapRecord,
    next_start: Option<DateTime<Utc>>,
) -> Vec<&'a SamplePoint> {
    let Some(start) = lap.start_time else {
        return Vec::new();
    };
    let end = next_start.or_else(|| {
        lap.total_time_s
            .map(|secs| start + Duration::milliseconds((secs * 1000.0).round() as i64))
    });

    samples
        .iter()
        .filter(|sample| {
            sample
                .absolute_time
                .is_some_and(|t| t >= start && end.is_none_or(|end| t < end))
        })
        .collect()
}

fn window_span(window: &[&SamplePoint]) -> Option<f64> {
    let first = window.first()?;
    let last = window.last()?;
    Some(last.relative_seconds - first.relative_seconds)
}

/// Time-weighted percentage of the window inside the target band
fn target_share(window: &[&SamplePoint], target: &IntervalTarget) -> Option<f64> {
    let (inside, measured) = window
        .iter()
        .filter_map(|sample| Some((target.metric.value_of(sample)?, sample.delta_seconds)))
        .fold((0.0, 0.0), |(inside, measured), (value, dt)| {
            if target.contains(value) {
                (inside + dt, measured + dt)
            } else {
                (inside, measured + dt)
            }
        });
    (measured > 0.0).then(|| inside / measured * 100.0)
}

/// `clamp(100 - 100 × scale × cv, 0, 100)` over the window's pace values
fn pace_stability_score(window: &[&SamplePoint]) -> Option<f64> {
    let paces: Vec<f64> = window
        .iter()
        .filter_map(|sample| sample.pace_seconds_per_km)
        .collect();
    if paces.len() < 2 {
        return None;
    }

    let count = paces.len() as f64;
    let mean = paces.iter().sum::<f64>() / count;
    if mean <= 0.0 {
        return None;
    }
    let variance = paces.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / count;
    let cv = variance.sqrt() / mean;
    let score = (-100.0 * PACE_STABILITY_SCALE).mul_add(cv, 100.0);
    Some(score.clamp(0.0, 100.0))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap()
    }

    fn samples(hr: impl Fn(i64) -> f64, speed: impl Fn(i64) -> f64) -> Vec<SamplePoint> {
        (0..120)
            .map(|i| {
                let v = speed(i);
                SamplePoint {
                    absolute_time: Some(start() + Duration::seconds(i)),
                    relative_seconds: i as f64,
                    delta_seconds: if i == 0 { 0.0 } else { 1.0 },
                    heart_rate: Some(hr(i)),
                    speed: Some(v),
                    pace_seconds_per_km: Some(1000.0 / v),
                    ..SamplePoint::default()
                }
            })
            .collect()
    }

    fn laps() -> Vec<LapRecord> {
        vec![
            LapRecord {
                start_time: Some(start()),
                total_time_s: Some(60.0),
                ..LapRecord::default()
            },
            LapRecord {
                start_time: Some(start() + Duration::seconds(60)),
                total_time_s: Some(60.0),
                ..LapRecord::default()
            },
        ]
    }

    #[test]
    fn test_measured_share_in_band() {
        // First lap: HR 150 for 30 s then 170
        let data = samples(|i| if i < 30 { 150.0 } else { 170.0 }, |_| 3.0);
        let target = IntervalTarget {
            metric: TargetMetric::HeartRate,
            low: 140.0,
            high: 160.0,
        };
        let result = interval_compliance(&data, &laps(), &[target]);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].kind, ComplianceKind::Measured);
        // Samples 1..=29 inside (29 s), 30..=59 outside (30 s)
        let score = result[0].score.unwrap();
        assert!((score - 29.0 / 59.0 * 100.0).abs() < 1e-9);
        assert_eq!(result[1].kind, ComplianceKind::PaceStabilitySurrogate);
    }

    #[test]
    fn test_surrogate_constant_pace_scores_full() {
        let data = samples(|_| 150.0, |_| 3.0);
        let result = interval_compliance(&data, &laps(), &[]);
        assert!((result[1].score.unwrap() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_surrogate_erratic_pace_clamps_to_zero() {
        let data = samples(|_| 150.0, |i| if i % 2 == 0 { 1.5 } else { 4.5 });
        let result = interval_compliance(&data, &laps(), &[]);
        assert!(result[0].score.unwrap().abs() < f64::EPSILON);
    }

    #[test]
    fn test_lap_without_start_has_no_score() {
        let data = samples(|_| 150.0, |_| 3.0);
        let lap = LapRecord::default();
        let result = interval_compliance(&data, &[lap], &[]);
        assert!(result[0].score.is_none());
        assert!(result[0].duration_seconds.is_none());
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ComplianceKind::PaceStabilitySurrogate).unwrap();
        assert_eq!(json, "\"pace_stability_surrogate\"");
        let metric: TargetMetric = serde_json::from_str("\"heart_rate\"").unwrap();
        assert_eq!(metric, TargetMetric::HeartRate);
    }
}
