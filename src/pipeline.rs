// ABOUTME: End-to-end pipeline from FIT bytes to workout summaries, load trends and a plan draft
// ABOUTME: Files are processed in order; a decode failure skips that file and the batch continues
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pipeline
//!
//! Reader, normalizer, metric engine and summarizer run once per file. For a
//! batch, dated summaries feed the load aggregator and its daily series feeds
//! the plan drafter. Nothing is shared between files.

use std::path::{Path, PathBuf};

use capyrun_core::config::AthleteConfig;
use capyrun_core::errors::AppResult;
use capyrun_core::models::{
    DailyLoad, FitActivity, LapRecord, PlanDraft, SamplePoint, SessionRecord, WorkoutSummary,
    ZoneTime,
};
use capyrun_intelligence::{
    interval_compliance, zone_time, IntervalTarget, LapCompliance, LoadAggregator, PlanDrafter,
    TrailingTotals,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::fit::{decode_bytes, read_fit_file};
use crate::summary::summarize;
use crate::timeseries::normalize;

/// Everything derived from one file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    /// Display name of the source
    pub name: String,
    /// Session messages as reported by the device
    pub sessions: Vec<SessionRecord>,
    /// Lap messages ordered by start time
    pub laps: Vec<LapRecord>,
    /// Full normalized sample sequence; display capping is left to the caller
    pub samples: Vec<SamplePoint>,
    /// Reconciled summary
    pub summary: WorkoutSummary,
    /// Time in heart-rate zone, absent without bounds or heart rate
    pub zones: Option<Vec<ZoneTime>>,
    /// Per-lap compliance
    pub compliance: Vec<LapCompliance>,
}

/// A summary tagged with the file it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSummary {
    /// Display name of the source
    pub name: String,
    /// Reconciled summary
    #[serde(flatten)]
    pub summary: WorkoutSummary,
}

/// A file the batch had to skip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFailure {
    /// Display name of the source
    pub name: String,
    /// Human-readable reason
    pub error: String,
}

/// Result of processing several files, in input order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchOutcome {
    /// Successfully summarized files
    pub summaries: Vec<FileSummary>,
    /// Files skipped because they could not be decoded
    pub failures: Vec<FileFailure>,
}

impl BatchOutcome {
    /// Owned copies of the summaries without their file names
    #[must_use]
    pub fn workout_summaries(&self) -> Vec<WorkoutSummary> {
        self.summaries.iter().map(|s| s.summary.clone()).collect()
    }
}

/// Multi-session load trends and the drafted plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    /// Densified daily series with ATL/CTL/TSB
    pub daily: Vec<DailyLoad>,
    /// TRIMP over the trailing seven days
    pub last7_trimp: f64,
    /// Distance over the trailing seven days (km)
    pub last7_distance_km: f64,
    /// ATL of the latest day
    pub current_atl: f64,
    /// CTL of the latest day
    pub current_ctl: f64,
    /// TSB of the latest day
    pub current_tsb: f64,
    /// Next-week plan, absent when there is no distance to base it on
    pub plan: Option<PlanDraft>,
}

/// Runs the per-file and multi-file stages for one athlete
#[derive(Debug, Clone)]
pub struct ActivityPipeline {
    athlete: AthleteConfig,
    aggregator: LoadAggregator,
    targets: Vec<IntervalTarget>,
}

impl ActivityPipeline {
    /// Create a pipeline for the given athlete
    #[must_use]
    pub fn new(athlete: AthleteConfig) -> Self {
        Self {
            athlete,
            aggregator: LoadAggregator::default(),
            targets: Vec::new(),
        }
    }

    /// Use explicit per-lap targets for compliance scoring
    #[must_use]
    pub fn with_targets(mut self, targets: Vec<IntervalTarget>) -> Self {
        self.targets = targets;
        self
    }

    /// Process one in-memory FIT file
    ///
    /// # Errors
    ///
    /// Returns `DECODE_FAILED` when the bytes are not a readable FIT file
    pub fn process_bytes(&self, name: &str, bytes: &[u8]) -> AppResult<FileReport> {
        let activity = decode_bytes(bytes)?;
        Ok(self.report(name, activity))
    }

    /// Process one FIT file from disk
    ///
    /// # Errors
    ///
    /// Returns `DECODE_FAILED` when the file cannot be read or decoded
    pub fn process_file(&self, path: &Path) -> AppResult<FileReport> {
        let activity = read_fit_file(path)?;
        Ok(self.report(&display_name(path), activity))
    }

    /// Summarize several in-memory files, skipping the ones that fail
    #[must_use]
    pub fn process_batch<'a, I>(&self, files: I) -> BatchOutcome
    where
        I: IntoIterator<Item = (&'a str, &'a [u8])>,
    {
        let mut outcome = BatchOutcome::default();
        for (name, bytes) in files {
            record_outcome(&mut outcome, name, self.process_bytes(name, bytes));
        }
        log_batch(&outcome);
        outcome
    }

    /// Summarize several files on disk, skipping the ones that fail
    #[must_use]
    pub fn process_paths(&self, paths: &[PathBuf]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for path in paths {
            let name = display_name(path);
            record_outcome(&mut outcome, &name, self.process_file(path));
        }
        log_batch(&outcome);
        outcome
    }

    /// Build load trends and the plan from summaries
    ///
    /// # Errors
    ///
    /// Returns `INSUFFICIENT_DATA` when no summary carries a start date;
    /// callers show this as an informational message.
    pub fn build_trends(&self, summaries: &[WorkoutSummary]) -> AppResult<TrendReport> {
        let daily = self.aggregator.daily_series(summaries)?;
        let trailing = TrailingTotals::last_week(&daily);
        let latest = daily
            .last()
            .map_or((0.0, 0.0, 0.0), |day| (day.atl, day.ctl, day.tsb));
        let plan = PlanDrafter.draft(&daily);

        Ok(TrendReport {
            daily,
            last7_trimp: trailing.trimp,
            last7_distance_km: trailing.distance_km,
            current_atl: latest.0,
            current_ctl: latest.1,
            current_tsb: latest.2,
            plan,
        })
    }

    fn report(&self, name: &str, activity: FitActivity) -> FileReport {
        let samples = normalize(&activity.records);
        let summary = summarize(&activity, &samples, &self.athlete);
        let zones = zone_time(&samples, &self.athlete.zone_bounds);
        let compliance = interval_compliance(&samples, &activity.laps, &self.targets);

        info!(
            file = name,
            samples = samples.len(),
            dated = summary.is_dated(),
            "Processed activity file"
        );

        FileReport {
            name: name.to_owned(),
            sessions: activity.sessions,
            laps: activity.laps,
            samples,
            summary,
            zones,
            compliance,
        }
    }
}

fn record_outcome(outcome: &mut BatchOutcome, name: &str, result: AppResult<FileReport>) {
    match result {
        Ok(report) => outcome.summaries.push(FileSummary {
            name: report.name,
            summary: report.summary,
        }),
        Err(e) => {
            warn!(file = name, error = %e, "Skipping file that could not be decoded");
            outcome.failures.push(FileFailure {
                name: name.to_owned(),
                error: e.to_string(),
            });
        }
    }
}

fn log_batch(outcome: &BatchOutcome) {
    info!(
        summarized = outcome.summaries.len(),
        failed = outcome.failures.len(),
        "Batch processed"
    );
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
