// ABOUTME: Survey intake orchestrator - the single-athlete read-modify-write cycle
// ABOUTME: Buffers, daily lists, ledger update, DOMS, clearance, severe-day gate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tonus Fitness Intelligence

//! # Survey Processing
//!
//! Runs one survey submission through the full ledger cycle for a single
//! athlete. The historic ledger update runs before the daily lists are
//! re-merged: at that point the canonical lists still describe what earlier
//! surveys recorded today, which is exactly the reference the same-day
//! correction needs.

use crate::config::LedgerConfig;
use crate::models::{ClearedSoreness, SorenessReport};
use crate::scoring::SorenessScoring;
use crate::state::AthleteBodyState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which daily survey produced a batch of reports
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SurveySource {
    /// Morning readiness survey
    Readiness,
    /// Post-session survey
    PostSession,
}

/// Result of one survey pass over an athlete's state
#[derive(Debug, Clone)]
pub struct ProcessingOutcome {
    /// Records evicted by the clearance rule during this pass
    pub cleared: Vec<ClearedSoreness>,
    /// The severe-day gate after the daily lists were rebuilt
    pub severe_today: bool,
}

/// Orchestrates the ledger cycle for survey submissions
pub struct SurveyProcessor<'a> {
    config: LedgerConfig,
    scoring: &'a dyn SorenessScoring,
}

impl<'a> SurveyProcessor<'a> {
    /// Build a processor over a config and the scoring collaborator
    #[must_use]
    pub const fn new(config: LedgerConfig, scoring: &'a dyn SorenessScoring) -> Self {
        Self { config, scoring }
    }

    /// Run one survey submission through the full cycle
    pub fn process_survey(
        &self,
        state: &mut AthleteBodyState,
        source: SurveySource,
        reports: &[SorenessReport],
        event_date_time: DateTime<Utc>,
    ) -> ProcessingOutcome {
        let event_date = event_date_time.date_naive();
        state.event_date = Some(event_date);

        // Undated reports inherit the survey submission time.
        let reports: Vec<SorenessReport> = reports
            .iter()
            .map(|report| {
                if report.reported_date_time.is_some() {
                    report.clone()
                } else {
                    report.clone().with_reported_date_time(event_date_time)
                }
            })
            .collect();

        // Ledger update first: the daily lists still hold what earlier
        // surveys recorded today, the reference for same-day corrections.
        for report in &reports {
            state.apply_report(report, event_date_time);
        }

        let soreness: Vec<SorenessReport> =
            reports.iter().filter(|r| !r.is_pain).cloned().collect();
        let pain: Vec<SorenessReport> = reports.iter().filter(|r| r.is_pain).cloned().collect();
        if !reports.is_empty() {
            state.daily_severe_soreness_event_date = Some(event_date);
            state.daily_severe_pain_event_date = Some(event_date);
        }

        match source {
            SurveySource::Readiness => {
                state.update_readiness_soreness(&soreness, event_date, &self.config);
                state.update_readiness_pain(&pain, event_date, &self.config);
            }
            SurveySource::PostSession => {
                state.update_post_session_soreness(&soreness, event_date, &self.config);
                state.update_post_session_pain(&pain, event_date, &self.config);
            }
        }
        state.rebuild_daily_soreness(event_date, self.scoring, &self.config);
        state.rebuild_daily_pain(event_date, self.scoring, &self.config);

        for report in soreness
            .iter()
            .filter(|r| r.body_part_location.is_muscle())
        {
            state.update_delayed_onset_muscle_soreness(report, self.scoring);
        }

        // Clearance runs once per day, on the readiness pass.
        let cleared = if source == SurveySource::Readiness {
            state.clear_doms(event_date_time, self.scoring, &self.config)
        } else {
            Vec::new()
        };
        if !cleared.is_empty() {
            debug!(
                athlete_id = %state.athlete_id,
                count = cleared.len(),
                "cleared soreness records evicted from ledger"
            );
        }

        let severe_today = state.has_severe_today(&self.config);
        ProcessingOutcome {
            cleared: cleared
                .into_iter()
                .map(|record| ClearedSoreness {
                    athlete_id: state.athlete_id,
                    record,
                })
                .collect(),
            severe_today,
        }
    }
}
