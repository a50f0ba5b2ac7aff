// ABOUTME: Integration tests for loading the athlete configuration from environment variables
// ABOUTME: Serialized because every case mutates process-wide environment state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use capyrun_core::config::AthleteConfig;
use capyrun_core::constants::heart_rate::{DEFAULT_MAX_HR, DEFAULT_RESTING_HR, DEFAULT_ZONE_BOUNDS};
use capyrun_core::errors::ErrorCode;
use serial_test::serial;

fn clear_athlete_env() {
    env::remove_var("CAPYRUN_HR_REST");
    env::remove_var("CAPYRUN_HR_MAX");
    env::remove_var("CAPYRUN_ZONE_BOUNDS");
}

#[test]
#[serial]
fn test_from_env_defaults_when_unset() {
    clear_athlete_env();
    let config = AthleteConfig::from_env();
    assert_eq!(config.hr_rest, DEFAULT_RESTING_HR);
    assert_eq!(config.hr_max, DEFAULT_MAX_HR);
    assert_eq!(config.zone_bounds, DEFAULT_ZONE_BOUNDS.to_vec());
}

#[test]
#[serial]
fn test_from_env_reads_overrides() {
    clear_athlete_env();
    env::set_var("CAPYRUN_HR_REST", "52");
    env::set_var("CAPYRUN_HR_MAX", " 184 ");
    env::set_var("CAPYRUN_ZONE_BOUNDS", "150,125, 165,nope");

    let config = AthleteConfig::from_env();
    assert_eq!(config.hr_rest, 52);
    assert_eq!(config.hr_max, 184);
    assert_eq!(config.zone_bounds, vec![125, 150, 165]);
    assert!(config.validate().is_ok());

    clear_athlete_env();
}

#[test]
#[serial]
fn test_from_env_unparsable_falls_back() {
    clear_athlete_env();
    env::set_var("CAPYRUN_HR_REST", "sixty");
    let config = AthleteConfig::from_env();
    assert_eq!(config.hr_rest, DEFAULT_RESTING_HR);
    clear_athlete_env();
}

#[test]
#[serial]
fn test_from_env_out_of_range_rejected_by_validate() {
    clear_athlete_env();
    env::set_var("CAPYRUN_HR_MAX", "300");
    let err = AthleteConfig::from_env().validate().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    clear_athlete_env();
}
