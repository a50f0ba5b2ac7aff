// ABOUTME: Daily training-load aggregation with exponentially smoothed ATL, CTL and TSB
// ABOUTME: Groups summaries by calendar day, fills rest days with zero load, then smooths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use capyrun_core::constants::load_model::{ATL_TAU_DAYS, CTL_TAU_DAYS, TRAILING_WINDOW_DAYS};
use capyrun_core::errors::{AppError, AppResult};
use capyrun_core::models::{DailyLoad, WorkoutSummary};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Exponential load model with acute and chronic time constants.
///
/// Each day `s[i] = s[i-1] + α × (load[i] - s[i-1])`, seeded at `s[-1] = 0`,
/// with `α = 1 - exp(-1/τ)`. ATL uses `τ = 7` days, CTL `τ = 42` days and
/// `TSB = CTL - ATL`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadAggregator {
    /// Acute (fatigue) time constant in days
    pub atl_tau_days: f64,
    /// Chronic (fitness) time constant in days
    pub ctl_tau_days: f64,
}

impl Default for LoadAggregator {
    fn default() -> Self {
        Self {
            atl_tau_days: ATL_TAU_DAYS,
            ctl_tau_days: CTL_TAU_DAYS,
        }
    }
}

impl LoadAggregator {
    /// Build the densified daily load series.
    ///
    /// Summaries without a calendar date are skipped. Missing TRIMP or
    /// distance contributes zero for that summary. The result covers every day
    /// from the earliest to the latest workout date, inclusive.
    ///
    /// # Errors
    ///
    /// Returns `INSUFFICIENT_DATA` when no summary carries a calendar date.
    pub fn daily_series(&self, summaries: &[WorkoutSummary]) -> AppResult<Vec<DailyLoad>> {
        let by_day = group_by_day(summaries);
        let (Some(&first), Some(&last)) = (by_day.keys().next(), by_day.keys().next_back()) else {
            return Err(AppError::insufficient_data(
                "no dated summaries to build a training-load series",
            ));
        };

        let days: Vec<(NaiveDate, f64, f64)> = first
            .iter_days()
            .take_while(|day| *day <= last)
            .map(|day| {
                let (trimp, distance) = by_day.get(&day).copied().unwrap_or((0.0, 0.0));
                (day, trimp, distance)
            })
            .collect();

        let loads: Vec<f64> = days.iter().map(|&(_, trimp, _)| trimp).collect();
        let acute = ewma_daily(&loads, self.atl_tau_days);
        let chronic = ewma_daily(&loads, self.ctl_tau_days);

        debug!(
            first = %first,
            last = %last,
            days = days.len(),
            workout_days = by_day.len(),
            "Built daily load series"
        );

        Ok(days
            .into_iter()
            .zip(acute.into_iter().zip(chronic))
            .map(|((date, trimp, distance), (fatigue, fitness))| DailyLoad {
                date,
                trimp_total: trimp,
                distance_km_total: distance,
                atl: fatigue,
                ctl: fitness,
                tsb: fitness - fatigue,
            })
            .collect())
    }
}

/// Exponentially weighted daily smoothing seeded at zero.
///
/// Formula: `α = 1 - exp(-1/τ)`, `s_i = s_{i-1} + α × (load_i - s_{i-1})`.
/// The output has the same length as `load`.
#[must_use]
pub fn ewma_daily(load: &[f64], tau_days: f64) -> Vec<f64> {
    let alpha = 1.0 - (-1.0 / tau_days).exp();
    load.iter()
        .scan(0.0_f64, |smoothed, &value| {
            *smoothed = alpha.mul_add(value - *smoothed, *smoothed);
            Some(*smoothed)
        })
        .collect()
}

/// Load and distance over the trailing window of the daily series
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrailingTotals {
    /// Summed TRIMP
    pub trimp: f64,
    /// Summed distance (km)
    pub distance_km: f64,
}

impl TrailingTotals {
    /// Totals over the last seven entries of `daily`
    #[must_use]
    pub fn last_week(daily: &[DailyLoad]) -> Self {
        Self::over_last(daily, TRAILING_WINDOW_DAYS)
    }

    /// Totals over the last `window` entries of `daily`
    #[must_use]
    pub fn over_last(daily: &[DailyLoad], window: usize) -> Self {
        let tail = &daily[daily.len().saturating_sub(window)..];
        tail.iter().fold(Self::default(), |acc, day| Self {
            trimp: acc.trimp + day.trimp_total,
            distance_km: acc.distance_km + day.distance_km_total,
        })
    }
}

fn group_by_day(summaries: &[WorkoutSummary]) -> BTreeMap<NaiveDate, (f64, f64)> {
    let mut by_day: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
    let mut undated = 0_usize;
    for summary in summaries {
        let Some(date) = summary.calendar_date else {
            undated += 1;
            continue;
        };
        let entry = by_day.entry(date).or_insert((0.0, 0.0));
        entry.0 += summary.trimp.filter(|v| v.is_finite()).unwrap_or(0.0);
        entry.1 += summary.distance_km.filter(|v| v.is_finite()).unwrap_or(0.0);
    }
    if undated > 0 {
        warn!(
            undated,
            "Summaries without a start date excluded from the load series"
        );
    }
    by_day
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn summary(date: NaiveDate, trimp: f64, km: f64) -> WorkoutSummary {
        WorkoutSummary {
            calendar_date: Some(date),
            trimp: Some(trimp),
            distance_km: Some(km),
            ..WorkoutSummary::default()
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn test_ewma_seed_and_length() {
        let series = ewma_daily(&[100.0, 0.0, 0.0], 7.0);
        let alpha = 1.0 - (-1.0_f64 / 7.0).exp();
        assert_eq!(series.len(), 3);
        assert!((series[0] - alpha * 100.0).abs() < 1e-12);
        assert!((series[1] - series[0] * (1.0 - alpha)).abs() < 1e-12);
    }

    #[test]
    fn test_same_day_summaries_are_summed() {
        let summaries = vec![summary(day(1), 40.0, 5.0), summary(day(1), 60.0, 3.0)];
        let daily = LoadAggregator::default().daily_series(&summaries).unwrap();
        assert_eq!(daily.len(), 1);
        assert!((daily[0].trimp_total - 100.0).abs() < f64::EPSILON);
        assert!((daily[0].distance_km_total - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_metrics_contribute_zero() {
        let mut partial = summary(day(2), 0.0, 0.0);
        partial.trimp = None;
        partial.distance_km = None;
        let daily = LoadAggregator::default()
            .daily_series(&[summary(day(2), 30.0, 4.0), partial])
            .unwrap();
        assert!((daily[0].trimp_total - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_undated_only_is_insufficient() {
        let err = LoadAggregator::default()
            .daily_series(&[WorkoutSummary::default()])
            .unwrap_err();
        assert!(err.code.is_informational());
    }

    #[test]
    fn test_trailing_totals_shorter_than_window() {
        let summaries = vec![summary(day(1), 10.0, 2.0), summary(day(2), 20.0, 3.0)];
        let daily = LoadAggregator::default().daily_series(&summaries).unwrap();
        let totals = TrailingTotals::last_week(&daily);
        assert!((totals.trimp - 30.0).abs() < f64::EPSILON);
        assert!((totals.distance_km - 5.0).abs() < f64::EPSILON);
    }
}
