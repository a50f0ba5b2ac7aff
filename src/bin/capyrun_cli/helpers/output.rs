// ABOUTME: JSON output shapes for capyrun-cli reports
// ABOUTME: Caps the sample list for display and writes pretty JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::{self, Write};

use anyhow::Result;
use capyrun::pipeline::{FileFailure, FileReport, FileSummary, TrendReport};
use capyrun_core::models::{LapRecord, SamplePoint, SessionRecord, WorkoutSummary, ZoneTime};
use capyrun_intelligence::LapCompliance;
use serde::Serialize;

/// Single-file report as printed
#[derive(Serialize)]
pub struct SummaryOutput {
    pub file: String,
    pub summary: WorkoutSummary,
    pub zones: Option<Vec<ZoneTime>>,
    pub laps: Vec<LapRecord>,
    pub compliance: Vec<LapCompliance>,
    pub sessions: Vec<SessionRecord>,
    pub sample_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<Vec<SamplePoint>>,
}

impl SummaryOutput {
    /// Shape a report, keeping at most `sample_limit` samples when requested
    pub fn new(report: FileReport, sample_limit: Option<usize>) -> Self {
        let sample_count = report.samples.len();
        let samples = sample_limit.map(|limit| {
            let mut samples = report.samples;
            samples.truncate(limit);
            samples
        });
        Self {
            file: report.name,
            summary: report.summary,
            zones: report.zones,
            laps: report.laps,
            compliance: report.compliance,
            sessions: report.sessions,
            sample_count,
            samples,
        }
    }
}

/// Multi-file report as printed
#[derive(Serialize)]
pub struct TrendsOutput {
    pub sessions: Vec<FileSummary>,
    pub failures: Vec<FileFailure>,
    pub trends: Option<TrendReport>,
}

/// Write `value` as pretty JSON followed by a newline
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)?;
    writeln!(handle)?;
    Ok(())
}
