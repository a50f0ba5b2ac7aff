// ABOUTME: Main library entry point for the CapyRun FIT-to-metrics pipeline
// ABOUTME: Decodes FIT activity files, summarizes sessions, and models multi-session training load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `CapyRun`
//!
//! Turns binary FIT activity files into per-session summaries and
//! multi-session training-load trends with a drafted next-week plan.
//!
//! ## Architecture
//!
//! - **fit**: Reader producing typed record, lap and session messages
//! - **timeseries**: Normalizer producing the ordered sample sequence
//! - **summary**: Summarizer reconciling session totals with record metrics
//! - **pipeline**: Per-file and batch orchestration, trends and plan
//! - **config**: Environment-driven run configuration
//! - **logging**: Tracing subscriber setup
//!
//! Numeric work lives in `capyrun-intelligence`; shared types in `capyrun-core`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use capyrun::config::PipelineConfig;
//! use capyrun::pipeline::ActivityPipeline;
//! use capyrun_core::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = PipelineConfig::from_env();
//!     config.validate()?;
//!
//!     let pipeline = ActivityPipeline::new(config.athlete);
//!     let report = pipeline.process_file(Path::new("morning_run.fit"))?;
//!     println!("TRIMP: {:?}", report.summary.trimp);
//!     Ok(())
//! }
//! ```

/// Environment-driven run configuration
pub mod config;

/// FIT file reader
pub mod fit;

/// Logging configuration and subscriber setup
pub mod logging;

/// Per-file and batch orchestration
pub mod pipeline;

/// Session summarizer
pub mod summary;

/// Record stream normalization
pub mod timeseries;

pub use config::PipelineConfig;
pub use pipeline::{ActivityPipeline, BatchOutcome, FileReport, TrendReport};
