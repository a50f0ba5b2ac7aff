// ABOUTME: Environment-driven pipeline configuration aggregating athlete and logging settings
// ABOUTME: Every value has a documented default; unparsable environment values fall back to it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for one pipeline run.
//!
//! Configuration is environment-only: there is no config file. Command-line
//! flags are applied on top of the environment by the binary.

use std::env;

use capyrun_core::config::AthleteConfig;
use capyrun_core::constants::report::DEFAULT_RECORD_DISPLAY_LIMIT;
use capyrun_core::errors::AppResult;
use tracing::info;

use crate::logging::LoggingConfig;

/// Settings for a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Athlete heart-rate parameters and zone bounds
    pub athlete: AthleteConfig,
    /// Logging setup
    pub logging: LoggingConfig,
    /// Maximum sample rows included in single-file reports
    pub record_display_limit: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            athlete: AthleteConfig::default(),
            logging: LoggingConfig::default(),
            record_display_limit: DEFAULT_RECORD_DISPLAY_LIMIT,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from environment variables
    ///
    /// Reads the athlete variables, the logging variables, and
    /// `CAPYRUN_RECORD_LIMIT`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            athlete: AthleteConfig::from_env(),
            logging: LoggingConfig::from_env(),
            record_display_limit: env::var("CAPYRUN_RECORD_LIMIT")
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_RECORD_DISPLAY_LIMIT),
        }
    }

    /// Check the athlete configuration before processing any file
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` when the athlete heart rates are implausible
    pub fn validate(&self) -> AppResult<()> {
        self.athlete.validate()
    }

    /// Log the effective configuration
    pub fn log_summary(&self) {
        info!(
            hr_rest = self.athlete.hr_rest,
            hr_max = self.athlete.hr_max,
            zone_bounds = ?self.athlete.zone_bounds,
            record_display_limit = self.record_display_limit,
            "Pipeline configuration loaded"
        );
    }
}
