// ABOUTME: Integration tests for loading pipeline and logging configuration from the environment
// ABOUTME: Serialized because every case mutates process-wide environment state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use capyrun::config::PipelineConfig;
use capyrun::logging::{LogFormat, LoggingConfig};
use capyrun_core::constants::report::DEFAULT_RECORD_DISPLAY_LIMIT;
use capyrun_core::errors::ErrorCode;
use serial_test::serial;

const VARS: [&str; 6] = [
    "CAPYRUN_HR_REST",
    "CAPYRUN_HR_MAX",
    "CAPYRUN_ZONE_BOUNDS",
    "CAPYRUN_RECORD_LIMIT",
    "LOG_FORMAT",
    "RUST_LOG",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();
    let config = PipelineConfig::from_env();
    assert_eq!(config.record_display_limit, DEFAULT_RECORD_DISPLAY_LIMIT);
    assert_eq!(config.logging.format, LogFormat::Compact);
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_record_limit_and_log_format_overrides() {
    clear_env();
    env::set_var("CAPYRUN_RECORD_LIMIT", "25");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("RUST_LOG", "capyrun=debug");

    let config = PipelineConfig::from_env();
    assert_eq!(config.record_display_limit, 25);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.logging.level, "capyrun=debug");

    clear_env();
}

#[test]
#[serial]
fn test_unparsable_record_limit_falls_back() {
    clear_env();
    env::set_var("CAPYRUN_RECORD_LIMIT", "lots");
    let config = PipelineConfig::from_env();
    assert_eq!(config.record_display_limit, DEFAULT_RECORD_DISPLAY_LIMIT);
    clear_env();
}

#[test]
#[serial]
fn test_invalid_heart_rates_fail_validation() {
    clear_env();
    env::set_var("CAPYRUN_HR_REST", "70");
    env::set_var("CAPYRUN_HR_MAX", "150");
    assert!(PipelineConfig::from_env().validate().is_ok());

    env::set_var("CAPYRUN_HR_MAX", "250");
    let error = PipelineConfig::from_env().validate().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    clear_env();
}

#[test]
fn test_verbose_keeps_explicit_filter() {
    let config = LoggingConfig {
        level: "warn".into(),
        ..LoggingConfig::default()
    };
    assert_eq!(config.verbose(true).level, "warn");
    assert_eq!(LoggingConfig::default().verbose(false).level, "info");
}
