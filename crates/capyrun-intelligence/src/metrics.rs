// ABOUTME: Per-session scalar metrics computed from the normalized sample sequence
// ABOUTME: TRIMP, efficiency factor, aerobic decoupling, moving time, elevation and averages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session metrics.
//!
//! Every function accepts an empty slice and returns `None` in that case.
//! `None` means "insufficient data" and is never an error; callers must keep
//! it distinct from a computed zero.

use capyrun_core::config::AthleteConfig;
use capyrun_core::constants::metrics::{
    DECOUPLING_MIN_HALF_SAMPLES, DECOUPLING_MIN_SAMPLES, ELEVATION_JITTER_M, ELEVATION_SPIKE_M,
    MOVING_SPEED_THRESHOLD_MPS, TRIMP_SCALE,
};
use capyrun_core::models::SamplePoint;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Record-derived metrics for one session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionMetrics {
    /// Time-weighted training impulse
    pub trimp: Option<f64>,
    /// Mean speed over mean heart rate
    pub efficiency_factor: Option<f64>,
    /// Pa:Hr drift between halves (percent)
    pub decoupling_percent: Option<f64>,
    /// Mean heart rate over present samples (bpm)
    pub average_hr: Option<f64>,
    /// Highest heart rate sample (bpm)
    pub max_hr: Option<f64>,
    /// Largest cumulative distance (m)
    pub distance_m: Option<f64>,
    /// Span of relative time (s)
    pub elapsed_s: Option<f64>,
    /// Time spent above the moving-speed threshold (s)
    pub moving_time_s: Option<f64>,
    /// Filtered elevation gain (m)
    pub elevation_gain_m: Option<f64>,
    /// Filtered elevation loss (m)
    pub elevation_loss_m: Option<f64>,
    /// Mean power over present samples (W)
    pub avg_power: Option<f64>,
}

/// Computes [`SessionMetrics`] for one athlete
#[derive(Debug, Clone, Copy)]
pub struct MetricsCalculator {
    /// Resting heart rate (bpm)
    pub hr_rest: u32,
    /// Maximum heart rate (bpm)
    pub hr_max: u32,
}

impl MetricsCalculator {
    /// Create a calculator from explicit heart-rate parameters
    #[must_use]
    pub const fn new(hr_rest: u32, hr_max: u32) -> Self {
        Self { hr_rest, hr_max }
    }

    /// Create a calculator for the given athlete
    #[must_use]
    pub const fn for_athlete(athlete: &AthleteConfig) -> Self {
        Self::new(athlete.hr_rest, athlete.hr_max)
    }

    /// Compute every record-derived metric in one call
    #[must_use]
    pub fn calculate(&self, samples: &[SamplePoint]) -> SessionMetrics {
        let elevation = elevation_gain_loss(samples);
        let metrics = SessionMetrics {
            trimp: self.trimp(samples),
            efficiency_factor: efficiency_factor(samples),
            decoupling_percent: decoupling(samples),
            average_hr: average_hr(samples),
            max_hr: max_hr(samples),
            distance_m: max_distance(samples),
            elapsed_s: elapsed_seconds(samples),
            moving_time_s: moving_time(samples),
            elevation_gain_m: elevation.map(|(gain, _)| gain),
            elevation_loss_m: elevation.map(|(_, loss)| loss),
            avg_power: average_power(samples),
        };
        debug!(
            samples = samples.len(),
            has_trimp = metrics.trimp.is_some(),
            has_ef = metrics.efficiency_factor.is_some(),
            has_decoupling = metrics.decoupling_percent.is_some(),
            "Computed session metrics"
        );
        metrics
    }

    /// Time-weighted TRIMP for this athlete
    #[must_use]
    pub fn trimp(&self, samples: &[SamplePoint]) -> Option<f64> {
        trimp(samples, self.hr_rest, self.hr_max)
    }
}

/// Time-weighted training impulse.
///
/// Formula: `100 × Σ(r_i × Δt_i / 60)` with
/// `r_i = max(0, (hr_i - hr_rest) / max(1, hr_max - hr_rest))`.
///
/// Samples without heart rate contribute nothing. Returns `None` when no
/// sample carries heart rate or when the sum is not strictly positive.
#[must_use]
pub fn trimp(samples: &[SamplePoint], hr_rest: u32, hr_max: u32) -> Option<f64> {
    if samples.iter().all(|s| s.heart_rate.is_none()) {
        debug!("TRIMP skipped: no heart-rate samples");
        return None;
    }

    let reserve = f64::from(hr_max.saturating_sub(hr_rest).max(1));
    let rest = f64::from(hr_rest);
    let weighted_minutes: f64 = samples
        .iter()
        .filter_map(|s| {
            let hr = s.heart_rate?;
            let fraction = ((hr - rest) / reserve).max(0.0);
            Some(fraction * s.delta_seconds / 60.0)
        })
        .sum();

    let value = weighted_minutes * TRIMP_SCALE;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Efficiency factor: mean speed over mean heart rate.
///
/// Uses samples where both are present and heart rate is positive.
#[must_use]
pub fn efficiency_factor(samples: &[SamplePoint]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = samples
        .iter()
        .filter_map(SamplePoint::speed_hr_pair)
        .filter(|&(_, hr)| hr > 0.0)
        .collect();
    pair_efficiency(&pairs)
}

/// Aerobic decoupling (Pa:Hr) in percent.
///
/// The valid samples (speed > 0 and heart rate > 0) are split by position into
/// two contiguous halves; the result is `(EF_second / EF_first - 1) × 100`.
#[must_use]
pub fn decoupling(samples: &[SamplePoint]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = samples
        .iter()
        .filter_map(SamplePoint::speed_hr_pair)
        .filter(|&(speed, hr)| speed > 0.0 && hr > 0.0)
        .collect();

    if pairs.len() < DECOUPLING_MIN_SAMPLES {
        debug!(
            valid_samples = pairs.len(),
            required = DECOUPLING_MIN_SAMPLES,
            "Decoupling skipped: not enough speed/HR pairs"
        );
        return None;
    }

    let (first, second) = pairs.split_at(pairs.len() / 2);
    if first.len() < DECOUPLING_MIN_HALF_SAMPLES || second.len() < DECOUPLING_MIN_HALF_SAMPLES {
        return None;
    }

    let first_ef = pair_efficiency(first)?;
    let second_ef = pair_efficiency(second)?;
    if first_ef <= 0.0 {
        return None;
    }
    Some((second_ef / first_ef - 1.0) * 100.0)
}

/// Mean heart rate over samples that carry one
#[must_use]
pub fn average_hr(samples: &[SamplePoint]) -> Option<f64> {
    mean(samples.iter().filter_map(|s| s.heart_rate))
}

/// Highest heart rate sample
#[must_use]
pub fn max_hr(samples: &[SamplePoint]) -> Option<f64> {
    samples.iter().filter_map(|s| s.heart_rate).reduce(f64::max)
}

/// Mean power over samples that carry one
#[must_use]
pub fn average_power(samples: &[SamplePoint]) -> Option<f64> {
    mean(samples.iter().filter_map(|s| s.power))
}

/// Largest cumulative distance (m)
#[must_use]
pub fn max_distance(samples: &[SamplePoint]) -> Option<f64> {
    samples
        .iter()
        .filter_map(|s| s.cumulative_distance)
        .reduce(f64::max)
}

/// Span between the earliest and latest relative time (s)
#[must_use]
pub fn elapsed_seconds(samples: &[SamplePoint]) -> Option<f64> {
    let times = samples.iter().map(|s| s.relative_seconds);
    let first = times.clone().reduce(f64::min)?;
    let last = times.reduce(f64::max)?;
    Some(last - first)
}

/// Seconds spent above the moving-speed threshold.
///
/// Returns `None` when no sample reports speed.
#[must_use]
pub fn moving_time(samples: &[SamplePoint]) -> Option<f64> {
    if samples.iter().all(|s| s.speed.is_none()) {
        return None;
    }
    Some(
        samples
            .iter()
            .filter(|s| s.speed.is_some_and(|v| v > MOVING_SPEED_THRESHOLD_MPS))
            .map(|s| s.delta_seconds)
            .sum(),
    )
}

/// Elevation gain and loss from adjacent elevation readings.
///
/// Steps smaller than the jitter threshold or larger than the spike threshold
/// are ignored. Returns `None` with fewer than two elevation readings.
#[must_use]
pub fn elevation_gain_loss(samples: &[SamplePoint]) -> Option<(f64, f64)> {
    let elevations: Vec<f64> = samples.iter().filter_map(|s| s.elevation).collect();
    if elevations.len() < 2 {
        return None;
    }

    let (gain, loss) = elevations
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .filter(|step| (ELEVATION_JITTER_M..=ELEVATION_SPIKE_M).contains(&step.abs()))
        .fold((0.0, 0.0), |(gain, loss), step| {
            if step > 0.0 {
                (gain + step, loss)
            } else {
                (gain, loss - step)
            }
        });
    Some((gain, loss))
}

fn pair_efficiency(pairs: &[(f64, f64)]) -> Option<f64> {
    let mean_speed = mean(pairs.iter().map(|&(speed, _)| speed))?;
    let mean_hr = mean(pairs.iter().map(|&(_, hr)| hr))?;
    (mean_hr > 0.0).then(|| mean_speed / mean_hr)
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0_u32), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / f64::from(count))
}
