// ABOUTME: Core types and constants for the CapyRun FIT-to-metrics pipeline
// ABOUTME: Foundation crate with error handling, data model, policy constants, and formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `CapyRun` Core
//!
//! Foundation crate providing shared types and constants for the `CapyRun`
//! training-load pipeline. Everything here is plain data: decoding lives in the
//! root crate and the numeric work lives in `capyrun-intelligence`.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `DecodeError`
//! - **models**: Samples, laps, sessions, workout summaries, daily load, plan drafts
//! - **constants**: Physiological ranges and tunable policy tables
//! - **config**: Athlete configuration and zone-bound parsing
//! - **formatters**: Duration and pace display helpers

/// Unified error handling system with standard error codes
pub mod errors;

/// Data model shared by every pipeline stage
pub mod models;

/// Physiological ranges and tunable policy tables
pub mod constants;

/// Athlete configuration (resting/max HR, zone bounds)
pub mod config;

/// Duration and pace display formatting
pub mod formatters;
