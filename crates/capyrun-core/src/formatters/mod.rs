// ABOUTME: Display helpers for durations, paces, and fixed-precision rounding
// ABOUTME: Durations render as H:MM:SS or M:SS; paces render as M:SS per kilometre
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Formatting helpers used by the summarizer and report writers.
//!
//! `format_duration` and `parse_duration` are exact inverses for every
//! non-negative whole number of seconds.

use crate::errors::{AppError, AppResult};

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Format a duration as `H:MM:SS` when at least one hour, otherwise `M:SS`.
///
/// The input is rounded to whole seconds. Returns `None` for negative or
/// non-finite input.
#[must_use]
pub fn format_duration(seconds: f64) -> Option<String> {
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = seconds.round() as u64;
    Some(format_whole_seconds(total))
}

/// Format a whole number of seconds as `H:MM:SS` or `M:SS`
#[must_use]
pub fn format_whole_seconds(total: u64) -> String {
    let hours = total / SECONDS_PER_HOUR;
    let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let secs = total % SECONDS_PER_MINUTE;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Parse `H:MM:SS` or `M:SS` back into whole seconds
///
/// # Errors
///
/// Returns `INVALID_INPUT` when the text does not have two or three
/// colon-separated numeric parts, or when a minutes/seconds part exceeds 59
/// in a position where it must be two-digit.
pub fn parse_duration(text: &str) -> AppResult<u64> {
    let parts: Vec<&str> = text.trim().split(':').collect();
    let numbers = parts
        .iter()
        .map(|part| {
            part.parse::<u64>()
                .map_err(|_| AppError::invalid_input(format!("Invalid duration '{text}'")))
        })
        .collect::<AppResult<Vec<u64>>>()?;

    match numbers.as_slice() {
        [minutes, secs] => {
            check_sexagesimal(*secs, text)?;
            Ok(minutes * SECONDS_PER_MINUTE + secs)
        }
        [hours, minutes, secs] => {
            check_sexagesimal(*minutes, text)?;
            check_sexagesimal(*secs, text)?;
            let hour_part = hours * SECONDS_PER_HOUR;
            Ok(hour_part + minutes * SECONDS_PER_MINUTE + secs)
        }
        _ => Err(AppError::invalid_input(format!(
            "Duration must look like H:MM:SS or M:SS, got '{text}'"
        ))),
    }
}

fn check_sexagesimal(value: u64, text: &str) -> AppResult<()> {
    if value >= SECONDS_PER_MINUTE {
        return Err(AppError::invalid_input(format!(
            "Minutes and seconds must be below 60 in '{text}'"
        )));
    }
    Ok(())
}

/// Seconds needed to cover one kilometre at `speed_mps`, `None` when not moving
#[must_use]
pub fn pace_seconds_per_km(speed_mps: f64) -> Option<f64> {
    (speed_mps.is_finite() && speed_mps > 0.0).then(|| 1000.0 / speed_mps)
}

/// Format a speed as a pace string `M:SS` per kilometre.
///
/// Returns `None` for missing, zero, or negative speed.
#[must_use]
pub fn format_pace(speed_mps: Option<f64>) -> Option<String> {
    let seconds_per_km = pace_seconds_per_km(speed_mps?)?;
    // Round the total first so 59.6 s never renders as ":60"
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = seconds_per_km.round() as u64;
    Some(format!(
        "{}:{:02}",
        total / SECONDS_PER_MINUTE,
        total % SECONDS_PER_MINUTE
    ))
}

/// Round to a fixed number of decimal places
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
