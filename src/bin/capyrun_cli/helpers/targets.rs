// ABOUTME: Parser for per-lap target bands given on the command line
// ABOUTME: Accepts METRIC:LOW-HIGH with metric hr, speed or power
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{bail, Context, Result};
use capyrun_intelligence::{IntervalTarget, TargetMetric};

/// Parse `hr:150-165`, `speed:4.2-4.5` or `power:250-280`
pub fn parse_lap_target(text: &str) -> Result<IntervalTarget> {
    let (metric, band) = text
        .split_once(':')
        .with_context(|| format!("Lap target '{text}' must look like METRIC:LOW-HIGH"))?;

    let metric = match metric.trim().to_ascii_lowercase().as_str() {
        "hr" | "heart_rate" => TargetMetric::HeartRate,
        "speed" => TargetMetric::Speed,
        "power" => TargetMetric::Power,
        other => bail!("Unknown lap target metric '{other}'"),
    };

    let (low, high) = band
        .split_once('-')
        .with_context(|| format!("Lap target band '{band}' must look like LOW-HIGH"))?;
    let low: f64 = low
        .trim()
        .parse()
        .with_context(|| format!("Invalid lower bound in '{text}'"))?;
    let high: f64 = high
        .trim()
        .parse()
        .with_context(|| format!("Invalid upper bound in '{text}'"))?;
    if !low.is_finite() || !high.is_finite() || low > high {
        bail!("Lap target '{text}' needs finite bounds with LOW <= HIGH");
    }

    Ok(IntervalTarget { metric, low, high })
}
