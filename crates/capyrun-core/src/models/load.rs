// ABOUTME: Daily training-load rows and the rule-based next-week plan draft
// ABOUTME: DailyLoad carries ATL/CTL/TSB per calendar day; PlanDraft carries seven day entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day of the densified load series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLoad {
    /// Calendar day
    pub date: NaiveDate,
    /// Summed TRIMP of every workout that day (0 on rest days)
    pub trimp_total: f64,
    /// Summed distance of every workout that day (km)
    pub distance_km_total: f64,
    /// Acute training load (fatigue, 7-day time constant)
    pub atl: f64,
    /// Chronic training load (fitness, 42-day time constant)
    pub ctl: f64,
    /// Training stress balance, `ctl - atl`
    pub tsb: f64,
}

/// Which volume rule the drafter applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanBranch {
    /// TSB below the deload threshold: reduce volume
    Deload,
    /// TSB within the neutral band: hold or nudge volume
    Maintenance,
    /// TSB above the progression threshold: add volume
    Progressive,
}

impl PlanBranch {
    /// Short rationale for the chosen branch
    #[must_use]
    pub const fn note(&self) -> &'static str {
        match self {
            Self::Deload => "TSB is low: reduce volume about 10% to recover",
            Self::Maintenance => "TSB is neutral: hold volume with a small increase of about 5%",
            Self::Progressive => "TSB is high: volume can carefully grow about 10%",
        }
    }
}

/// Session kind assigned to a plan day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    /// Easy aerobic run, zones 1-2
    Easy,
    /// Sustained tempo effort, zone 3
    Tempo,
    /// Repeated hard efforts, zone 4
    Intervals,
    /// Short recovery jog, zone 1
    Recovery,
    /// Long aerobic run, zone 2
    Long,
    /// Easy run finished with strides
    EasyWithStrides,
}

impl SessionType {
    /// Fixed Monday-to-Sunday session template
    pub const WEEK_TEMPLATE: [Self; 7] = [
        Self::Easy,
        Self::Tempo,
        Self::Easy,
        Self::Intervals,
        Self::Recovery,
        Self::Long,
        Self::EasyWithStrides,
    ];

    /// Human-readable description used by calendar/export collaborators
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Easy => "Easy Z1-Z2",
            Self::Tempo => "Tempo Z3 (20-30 min)",
            Self::Intervals => "Intervals Z4 (6x3'/2')",
            Self::Recovery => "Recovery 30-40' Z1",
            Self::Long => "Long Z2",
            Self::EasyWithStrides => "Easy + strides",
        }
    }
}

/// One day of the drafted week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    /// Weekday name, Monday first
    pub day_name: String,
    /// Session kind for the day
    pub session_type: SessionType,
    /// Planned distance (km, 1 decimal)
    pub target_km: f64,
}

/// Rule-based next-week mileage distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDraft {
    /// Branch selected from the latest TSB
    pub branch: PlanBranch,
    /// TSB of the most recent day
    pub basis_tsb: f64,
    /// Distance over the trailing 7 days (km)
    pub last7_distance_km: f64,
    /// Weekly volume target (km)
    pub target_km: f64,
    /// Rationale for the branch
    pub note: String,
    /// Monday-to-Sunday entries
    pub entries: Vec<PlanEntry>,
}
