// ABOUTME: Multi-file trends command for capyrun-cli
// ABOUTME: Summarizes every readable file, then prints load trends and the drafted plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;

use anyhow::Result;
use capyrun::config::PipelineConfig;
use capyrun::pipeline::ActivityPipeline;
use tracing::{info, warn};

use crate::helpers::output::{print_json, TrendsOutput};

/// Aggregate several files; unreadable files are skipped and listed
pub fn run(config: &PipelineConfig, files: &[PathBuf]) -> Result<()> {
    let pipeline = ActivityPipeline::new(config.athlete.clone());
    let outcome = pipeline.process_paths(files);

    if !outcome.failures.is_empty() {
        warn!(
            skipped = outcome.failures.len(),
            "Some files could not be decoded and were skipped"
        );
    }

    let trends = match pipeline.build_trends(&outcome.workout_summaries()) {
        Ok(trends) => Some(trends),
        Err(e) if e.code.is_informational() => {
            info!("{}", e.message);
            None
        }
        Err(e) => return Err(e.into()),
    };

    print_json(&TrendsOutput {
        sessions: outcome.summaries,
        failures: outcome.failures,
        trends,
    })
}
