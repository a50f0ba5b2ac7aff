// ABOUTME: CapyRun CLI - summarize FIT activity files and report multi-session training load
// ABOUTME: Prints JSON reports on stdout; logs go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Summarize one activity with custom zone bounds
//! capyrun-cli summarize morning_run.fit --zones "120,140,155,170,185"
//!
//! # Include the (capped) normalized samples in the report
//! capyrun-cli summarize morning_run.fit --records
//!
//! # Score laps against explicit targets
//! capyrun-cli summarize intervals.fit --lap-target hr:150-165 --lap-target speed:4.2-4.5
//!
//! # Load trends and next-week plan over a training block
//! capyrun-cli trends activities/*.fit
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::{Context, Result};
use capyrun::config::PipelineConfig;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "capyrun-cli",
    about = "CapyRun FIT activity analysis",
    long_about = "Summarize FIT activity files and derive load trends and a next-week plan."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Resting heart rate override (bpm)
    #[arg(long, global = true)]
    hr_rest: Option<u32>,

    /// Maximum heart rate override (bpm)
    #[arg(long, global = true)]
    hr_max: Option<u32>,

    /// Comma-separated heart-rate zone boundaries (bpm)
    #[arg(long, global = true)]
    zones: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Summarize a single activity file
    Summarize {
        /// FIT file to analyze
        file: PathBuf,

        /// Include normalized samples, capped at the record display limit
        #[arg(long)]
        records: bool,

        /// Per-lap target band as METRIC:LOW-HIGH (hr, speed or power), in lap order
        #[arg(long = "lap-target")]
        lap_targets: Vec<String>,
    },

    /// Aggregate several activity files into load trends and a plan
    Trends {
        /// FIT files to aggregate
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = PipelineConfig::from_env();
    if let Some(hr_rest) = cli.hr_rest {
        config.athlete.hr_rest = hr_rest;
    }
    if let Some(hr_max) = cli.hr_max {
        config.athlete.hr_max = hr_max;
    }
    if let Some(zones) = cli.zones.as_deref() {
        config.athlete = config.athlete.with_zone_text(zones);
    }
    config.logging = config.logging.verbose(cli.verbose);

    config
        .logging
        .init()
        .context("Failed to initialize logging")?;
    config.validate().context("Invalid athlete configuration")?;
    config.log_summary();

    match cli.command {
        Command::Summarize {
            file,
            records,
            lap_targets,
        } => commands::summarize::run(&config, &file, records, &lap_targets),
        Command::Trends { files } => commands::trends::run(&config, &files),
    }
}
