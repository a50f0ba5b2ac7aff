// ABOUTME: Single-file summary command for capyrun-cli
// ABOUTME: Runs the per-file pipeline and prints the report as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::{Context, Result};
use capyrun::config::PipelineConfig;
use capyrun::pipeline::ActivityPipeline;
use tracing::info;

use crate::helpers::output::{print_json, SummaryOutput};
use crate::helpers::targets::parse_lap_target;

/// Summarize one file; a decode failure is fatal here
pub fn run(
    config: &PipelineConfig,
    file: &Path,
    include_records: bool,
    lap_targets: &[String],
) -> Result<()> {
    let targets = lap_targets
        .iter()
        .map(|text| parse_lap_target(text))
        .collect::<Result<Vec<_>>>()?;

    let pipeline = ActivityPipeline::new(config.athlete.clone()).with_targets(targets);
    let report = pipeline
        .process_file(file)
        .with_context(|| format!("Failed to process {}", file.display()))?;

    info!(
        file = %report.name,
        laps = report.laps.len(),
        samples = report.samples.len(),
        "Summary ready"
    );

    let limit = include_records.then_some(config.record_display_limit);
    print_json(&SummaryOutput::new(report, limit))
}
