// ABOUTME: Per-athlete body-status aggregate - buffers, daily lists, historic records
// ABOUTME: Thin facade tying the pure transition functions to one athlete's state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tonus Fitness Intelligence

//! # Athlete Body State
//!
//! The full in-memory record for one athlete: four rolling raw-report
//! buffers, the two canonical daily lists, and the historic-soreness
//! ledger. Loaded whole, mutated synchronously, written back in a single
//! persistence call. Independent athletes share no state.

use crate::aggregation::rebuild_daily;
use crate::buffering::persist;
use crate::config::LedgerConfig;
use crate::doms;
use crate::historic_update::apply_report;
use crate::models::{HistoricSoreness, SorenessKey, SorenessReport};
use crate::routing::{follow_up_buckets, FollowUpBuckets};
use crate::scoring::SorenessScoring;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One athlete's complete body-status record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthleteBodyState {
    /// Owning athlete
    pub athlete_id: Uuid,
    /// Day the ledger was last advanced to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<NaiveDate>,
    /// Raw soreness reports from the readiness survey
    pub readiness_soreness: Vec<SorenessReport>,
    /// Raw pain reports from the readiness survey
    pub readiness_pain: Vec<SorenessReport>,
    /// Raw soreness reports from the post-session survey
    pub post_session_soreness: Vec<SorenessReport>,
    /// Raw pain reports from the post-session survey
    pub post_session_pain: Vec<SorenessReport>,
    /// Canonical daily soreness list (one entry per key, today or yesterday)
    pub daily_severe_soreness: Vec<SorenessReport>,
    /// Canonical daily pain list (one entry per key, today or yesterday)
    pub daily_severe_pain: Vec<SorenessReport>,
    /// Day the daily soreness list was last stamped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_severe_soreness_event_date: Option<NaiveDate>,
    /// Day the daily pain list was last stamped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_severe_pain_event_date: Option<NaiveDate>,
    /// The historic-soreness ledger
    pub historic_soreness: Vec<HistoricSoreness>,
}

impl AthleteBodyState {
    /// Fresh, empty state for an athlete
    #[must_use]
    pub const fn new(athlete_id: Uuid) -> Self {
        Self {
            athlete_id,
            event_date: None,
            readiness_soreness: Vec::new(),
            readiness_pain: Vec::new(),
            post_session_soreness: Vec::new(),
            post_session_pain: Vec::new(),
            daily_severe_soreness: Vec::new(),
            daily_severe_pain: Vec::new(),
            daily_severe_soreness_event_date: None,
            daily_severe_pain_event_date: None,
            historic_soreness: Vec::new(),
        }
    }

    /// Look up the ledger record for a key
    #[must_use]
    pub fn record(&self, key: SorenessKey) -> Option<&HistoricSoreness> {
        self.historic_soreness
            .iter()
            .find(|record| record.key() == key)
    }

    /// Severity already recorded for a key in the canonical daily lists on
    /// the given day
    #[must_use]
    pub fn daily_severity_on(&self, key: SorenessKey, date: NaiveDate) -> Option<f64> {
        self.daily_severe_pain
            .iter()
            .chain(&self.daily_severe_soreness)
            .find(|report| report.key() == key && report.reported_on(date))
            .map(|report| report.severity)
    }

    /// Replace the readiness soreness buffer with the retained window plus new reports
    pub fn update_readiness_soreness(
        &mut self,
        reports: &[SorenessReport],
        event_date: NaiveDate,
        config: &LedgerConfig,
    ) {
        self.readiness_soreness = persist(
            &self.readiness_soreness,
            reports,
            event_date,
            config.retention.raw_report_days,
        );
    }

    /// Replace the readiness pain buffer with the retained window plus new reports
    pub fn update_readiness_pain(
        &mut self,
        reports: &[SorenessReport],
        event_date: NaiveDate,
        config: &LedgerConfig,
    ) {
        self.readiness_pain = persist(
            &self.readiness_pain,
            reports,
            event_date,
            config.retention.raw_report_days,
        );
    }

    /// Replace the post-session soreness buffer with the retained window plus new reports
    pub fn update_post_session_soreness(
        &mut self,
        reports: &[SorenessReport],
        event_date: NaiveDate,
        config: &LedgerConfig,
    ) {
        self.post_session_soreness = persist(
            &self.post_session_soreness,
            reports,
            event_date,
            config.retention.raw_report_days,
        );
    }

    /// Replace the post-session pain buffer with the retained window plus new reports
    pub fn update_post_session_pain(
        &mut self,
        reports: &[SorenessReport],
        event_date: NaiveDate,
        config: &LedgerConfig,
    ) {
        self.post_session_pain = persist(
            &self.post_session_pain,
            reports,
            event_date,
            config.retention.raw_report_days,
        );
    }

    /// Rebuild the canonical daily soreness list from both source buffers
    pub fn rebuild_daily_soreness(
        &mut self,
        event_date: NaiveDate,
        scoring: &dyn SorenessScoring,
        config: &LedgerConfig,
    ) {
        self.daily_severe_soreness = rebuild_daily(
            &self.daily_severe_soreness,
            &self.readiness_soreness,
            &self.post_session_soreness,
            event_date,
            config.retention.daily_report_days,
            scoring,
        );
    }

    /// Rebuild the canonical daily pain list from both source buffers
    pub fn rebuild_daily_pain(
        &mut self,
        event_date: NaiveDate,
        scoring: &dyn SorenessScoring,
        config: &LedgerConfig,
    ) {
        self.daily_severe_pain = rebuild_daily(
            &self.daily_severe_pain,
            &self.readiness_pain,
            &self.post_session_pain,
            event_date,
            config.retention.daily_report_days,
            scoring,
        );
    }

    /// Apply one report to the matching ledger record
    ///
    /// No-op when no record matches the report's key; the historic update
    /// never creates records (only the DOMS lifecycle does).
    pub fn apply_report(&mut self, report: &SorenessReport, event_date_time: DateTime<Utc>) {
        let key = report.key();
        let prior = self.daily_severity_on(key, event_date_time.date_naive());
        if let Some(index) = self
            .historic_soreness
            .iter()
            .position(|record| record.key() == key)
        {
            let updated =
                apply_report(&self.historic_soreness[index], report, event_date_time, prior);
            self.historic_soreness[index] = updated;
        }
    }

    /// Fold a soreness report into the DOMS lifecycle
    pub fn update_delayed_onset_muscle_soreness(
        &mut self,
        report: &SorenessReport,
        scoring: &dyn SorenessScoring,
    ) {
        doms::apply_soreness(&mut self.historic_soreness, report, scoring);
    }

    /// Clear quiet DOMS episodes and evict every cleared record
    pub fn clear_doms(
        &mut self,
        now: DateTime<Utc>,
        scoring: &dyn SorenessScoring,
        config: &LedgerConfig,
    ) -> Vec<HistoricSoreness> {
        doms::clear_expired(
            &mut self.historic_soreness,
            now,
            scoring,
            &config.doms_clearance,
        )
    }

    /// Partition the ledger into the three follow-up buckets
    #[must_use]
    pub fn follow_up_buckets(&self) -> FollowUpBuckets {
        follow_up_buckets(&self.historic_soreness)
    }

    /// Coarse "is today bad" signal for downstream consumers
    #[must_use]
    pub fn has_severe_today(&self, config: &LedgerConfig) -> bool {
        let severe_pain = self
            .daily_severe_pain
            .iter()
            .filter(|report| report.severity >= config.severe_thresholds.pain_severity)
            .count();
        let severe_soreness = self
            .daily_severe_soreness
            .iter()
            .filter(|report| report.severity >= config.severe_thresholds.soreness_severity)
            .count();
        severe_pain + severe_soreness > 0
    }
}
