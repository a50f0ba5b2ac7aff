// ABOUTME: Training metrics engine, load modeling, and plan drafting for CapyRun
// ABOUTME: Pure functions over normalized samples and workout summaries, free of I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `CapyRun` Intelligence
//!
//! Numeric core of the pipeline. Every function here takes its inputs and the
//! athlete configuration as explicit parameters and holds no state between
//! calls.
//!
//! ## Modules
//!
//! - **metrics**: TRIMP, efficiency factor, aerobic decoupling and summary statistics
//! - **zones**: Heart-rate time-in-zone histogram
//! - **compliance**: Per-lap interval compliance scoring
//! - **`training_load`**: Daily load series with ATL/CTL/TSB smoothing
//! - **plan**: Rule-based next-week mileage draft

/// Per-session scalar metrics over the normalized sample sequence
pub mod metrics;

/// Heart-rate zone time histogram
pub mod zones;

/// Lap-window interval compliance scoring
pub mod compliance;

/// Multi-session daily load aggregation and exponential smoothing
pub mod training_load;

/// Rule-based weekly plan drafting
pub mod plan;

pub use compliance::{
    interval_compliance, ComplianceKind, IntervalTarget, LapCompliance, TargetMetric,
};
pub use metrics::{MetricsCalculator, SessionMetrics};
pub use plan::PlanDrafter;
pub use training_load::{ewma_daily, LoadAggregator, TrailingTotals};
pub use zones::zone_time;
