// ABOUTME: Rule-based next-week plan drafted from the latest TSB and trailing weekly distance
// ABOUTME: Branch thresholds, volume multipliers and day proportions come from policy constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan drafter.
//!
//! A static heuristic, not an optimizer: the latest TSB picks a volume
//! multiplier, the trailing seven-day distance is scaled by it, and the result
//! is spread over a fixed Monday-to-Sunday template.

use capyrun_core::constants::plan::{
    DAY_NAMES, DAY_PROPORTIONS, DELOAD_MULTIPLIER, MAINTENANCE_MULTIPLIER, PROGRESSIVE_MULTIPLIER,
    TSB_DELOAD_BELOW, TSB_PROGRESS_ABOVE,
};
use capyrun_core::formatters::round_to;
use capyrun_core::models::{DailyLoad, PlanBranch, PlanDraft, PlanEntry, SessionType};
use tracing::debug;

use crate::training_load::TrailingTotals;

/// Drafts a [`PlanDraft`] from a daily load series
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanDrafter;

impl PlanDrafter {
    /// Choose the branch for a TSB value
    #[must_use]
    pub fn branch_for(tsb: f64) -> PlanBranch {
        if tsb < TSB_DELOAD_BELOW {
            PlanBranch::Deload
        } else if tsb > TSB_PROGRESS_ABOVE {
            PlanBranch::Progressive
        } else {
            PlanBranch::Maintenance
        }
    }

    /// Volume multiplier for a branch
    #[must_use]
    pub const fn multiplier(branch: PlanBranch) -> f64 {
        match branch {
            PlanBranch::Deload => DELOAD_MULTIPLIER,
            PlanBranch::Maintenance => MAINTENANCE_MULTIPLIER,
            PlanBranch::Progressive => PROGRESSIVE_MULTIPLIER,
        }
    }

    /// Draft next week's plan.
    ///
    /// Returns `None` for an empty series, or when neither the trailing week
    /// nor the rest of the history recorded any distance.
    #[must_use]
    pub fn draft(&self, daily: &[DailyLoad]) -> Option<PlanDraft> {
        let latest = daily.last()?;
        let trailing = TrailingTotals::last_week(daily);
        let history_km: f64 = daily.iter().map(|d| d.distance_km_total).sum();
        if trailing.distance_km <= 0.0 && history_km <= 0.0 {
            debug!("Plan skipped: no recorded distance");
            return None;
        }

        let branch = Self::branch_for(latest.tsb);
        let target_km = (trailing.distance_km * Self::multiplier(branch)).max(0.0);
        let entries = DAY_NAMES
            .iter()
            .zip(SessionType::WEEK_TEMPLATE)
            .zip(DAY_PROPORTIONS)
            .map(|((day_name, session_type), share)| PlanEntry {
                day_name: (*day_name).to_owned(),
                session_type,
                target_km: round_to(target_km * share, 1),
            })
            .collect();

        debug!(
            ?branch,
            tsb = latest.tsb,
            last7_km = trailing.distance_km,
            target_km,
            "Drafted weekly plan"
        );

        Some(PlanDraft {
            branch,
            basis_tsb: latest.tsb,
            last7_distance_km: trailing.distance_km,
            target_km,
            note: branch.note().to_owned(),
            entries,
        })
    }
}
