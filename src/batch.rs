// ABOUTME: Athlete-sharded batch processing with per-athlete write serialization
// ABOUTME: Rayon fan-out, dashmap lock registry, versioned read-modify-write cycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tonus Fitness Intelligence

//! # Batch Runner
//!
//! Independent athlete ledgers share no state, so a batch of submissions
//! fans out across worker threads with no cross-athlete coordination.
//! Within one athlete, a per-athlete mutex serializes the read-modify-write
//! cycle and the store's version check catches any writer that raced past
//! the lock (for example a process that does not share this registry).

use crate::config::LedgerConfig;
use crate::errors::LedgerResult;
use crate::models::SorenessReport;
use crate::processing::{ProcessingOutcome, SurveyProcessor, SurveySource};
use crate::scoring::SorenessScoring;
use crate::store::{ClearedSorenessStore, StateStore};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rayon::prelude::*;
use std::sync::{Arc, Mutex, PoisonError};
use uuid::Uuid;

/// One survey submission awaiting processing
#[derive(Debug, Clone)]
pub struct SurveySubmission {
    /// Athlete the survey belongs to
    pub athlete_id: Uuid,
    /// Which survey produced the reports
    pub source: SurveySource,
    /// The raw reports
    pub reports: Vec<SorenessReport>,
    /// Submission time
    pub event_date_time: DateTime<Utc>,
}

/// Shards submissions across athletes and runs the full cycle per athlete
pub struct BatchRunner {
    config: LedgerConfig,
    locks: DashMap<Uuid, Arc<Mutex<()>>>,
}

impl BatchRunner {
    /// Runner over a ledger configuration
    #[must_use]
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            locks: DashMap::new(),
        }
    }

    fn athlete_lock(&self, athlete_id: Uuid) -> Arc<Mutex<()>> {
        self.locks
            .entry(athlete_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Process a batch of submissions, athletes in parallel
    ///
    /// Each submission is answered with its athlete id and the outcome of
    /// its cycle; a failed save (missing state, version conflict) fails only
    /// that submission.
    #[must_use]
    pub fn run(
        &self,
        submissions: &[SurveySubmission],
        store: &dyn StateStore,
        cleared_store: &dyn ClearedSorenessStore,
        scoring: &dyn SorenessScoring,
    ) -> Vec<(Uuid, LedgerResult<ProcessingOutcome>)> {
        submissions
            .par_iter()
            .map(|submission| {
                (
                    submission.athlete_id,
                    self.process_one(submission, store, cleared_store, scoring),
                )
            })
            .collect()
    }

    fn process_one(
        &self,
        submission: &SurveySubmission,
        store: &dyn StateStore,
        cleared_store: &dyn ClearedSorenessStore,
        scoring: &dyn SorenessScoring,
    ) -> LedgerResult<ProcessingOutcome> {
        let lock = self.athlete_lock(submission.athlete_id);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut versioned = store.load(submission.athlete_id)?;
        let processor = SurveyProcessor::new(self.config.clone(), scoring);
        let outcome = processor.process_survey(
            &mut versioned.state,
            submission.source,
            &submission.reports,
            submission.event_date_time,
        );
        store.save(&versioned.state, versioned.version)?;
        if !outcome.cleared.is_empty() {
            cleared_store.put_cleared(&outcome.cleared)?;
        }
        Ok(outcome)
    }
}
