// ABOUTME: Core data models shared by every stage of the FIT-to-metrics pipeline
// ABOUTME: Re-exports samples, laps, sessions, workout summaries, daily load and plan types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Each entity is produced by exactly one pipeline stage:
//!
//! - `RawRecord`, `LapRecord`, `SessionRecord`: the FIT reader
//! - `SamplePoint`: the time-series normalizer
//! - `WorkoutSummary`, `ZoneTime`: the session summarizer
//! - `DailyLoad`: the load aggregator
//! - `PlanDraft`: the plan drafter
//!
//! Every numeric field a device may omit is an `Option`. Zero is a real
//! measurement (distance at the start line, a stationary speed) and must stay
//! distinguishable from "not reported".

mod activity;
mod load;
mod sample;
mod summary;

pub use activity::{FitActivity, LapRecord, SessionRecord};
pub use load::{DailyLoad, PlanBranch, PlanDraft, PlanEntry, SessionType};
pub use sample::{RawRecord, SamplePoint};
pub use summary::{WorkoutSummary, ZoneTime};
