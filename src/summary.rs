// ABOUTME: Session summarizer reconciling device session totals with record-derived metrics
// ABOUTME: Session values win when present; samples fill the gaps; output is one WorkoutSummary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use capyrun_core::config::AthleteConfig;
use capyrun_core::formatters::{format_pace, format_whole_seconds, round_to};
use capyrun_core::models::{FitActivity, SamplePoint, SessionRecord, WorkoutSummary};
use capyrun_intelligence::MetricsCalculator;
use tracing::debug;

/// Build the summary for one decoded file.
///
/// Reconciliation order for distance, duration, heart rate, elevation and
/// power: the first session message if it reports the value, otherwise the
/// sample sequence. Sport and sub-sport come only from the session.
#[must_use]
pub fn summarize(
    activity: &FitActivity,
    samples: &[SamplePoint],
    athlete: &AthleteConfig,
) -> WorkoutSummary {
    let fallback = SessionRecord::default();
    let session = activity.primary_session().unwrap_or(&fallback);
    let metrics = MetricsCalculator::for_athlete(athlete).calculate(samples);

    let start_time = session
        .start_time
        .or_else(|| samples.iter().filter_map(|s| s.absolute_time).min());

    let distance_m = session.total_distance_m.or(metrics.distance_m);
    let duration_s = session
        .duration_seconds()
        .or(metrics.elapsed_s)
        .map(|secs| secs.max(0.0).round() as u64);

    let derived_speed = match (distance_m, duration_s) {
        (Some(meters), Some(secs)) if secs > 0 => Some(meters / secs as f64),
        _ => None,
    };
    let avg_speed = session.avg_speed.or(derived_speed);

    let summary = WorkoutSummary {
        start_time,
        calendar_date: start_time.map(|t| t.date_naive()),
        sport: session.sport.clone(),
        sub_sport: session.sub_sport.clone(),
        distance_km: distance_m.map(|m| round_to(m / 1000.0, 2)),
        duration_seconds: duration_s,
        duration_minutes: duration_s.map(|secs| round_to(secs as f64 / 60.0, 1)),
        duration_display: duration_s.map(format_whole_seconds),
        moving_time_seconds: metrics.moving_time_s.map(|secs| secs.round() as u64),
        average_hr: session.avg_hr.or(metrics.average_hr).map(round_bpm),
        max_hr: session.max_hr.or(metrics.max_hr).map(round_bpm),
        avg_pace: format_pace(avg_speed),
        trimp: metrics.trimp,
        efficiency_factor: metrics.efficiency_factor.map(|ef| round_to(ef, 4)),
        decoupling_percent: metrics.decoupling_percent.map(|pct| round_to(pct, 1)),
        elevation_gain_m: session
            .ascent_m
            .or(metrics.elevation_gain_m)
            .map(|m| round_to(m, 1)),
        elevation_loss_m: session
            .descent_m
            .or(metrics.elevation_loss_m)
            .map(|m| round_to(m, 1)),
        avg_power: session
            .avg_power
            .or(metrics.avg_power)
            .map(|w| round_to(w, 1)),
        calories: session.calories.map(|kcal| kcal.max(0.0).round() as u32),
        laps_count: activity.laps.len(),
    };

    debug!(
        start = ?summary.start_time,
        distance_km = ?summary.distance_km,
        duration_s = ?summary.duration_seconds,
        from_session = activity.primary_session().is_some(),
        "Summarized workout"
    );
    summary
}

fn round_bpm(bpm: f64) -> u32 {
    bpm.max(0.0).round() as u32
}
