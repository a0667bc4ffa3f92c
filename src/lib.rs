// ABOUTME: Library entry point for the Tonus body-status ledger
// ABOUTME: Per-athlete soreness/pain tracking, DOMS lifecycle, question routing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tonus Fitness Intelligence

#![deny(unsafe_code)]

//! # Tonus Body-Status Ledger
//!
//! The per-athlete "body-status ledger" of the Tonus coaching platform:
//! tracks, day by day, which body parts an athlete has reported as sore or
//! in pain, classifies each into a multi-stage severity status, and decides
//! which body parts the next daily survey should ask about.
//!
//! ## Responsibilities
//!
//! - **Report buffering**: rolling retention of raw reports from the
//!   readiness and post-session surveys.
//! - **Daily aggregation**: one canonical "daily severe" list per axis,
//!   merged across sources.
//! - **Historic ledger update**: pending statuses advance to confirmed ones
//!   on a qualifying report, with an incremental severity mean that
//!   tolerates same-day revisions.
//! - **DOMS lifecycle**: onset, reactivation, and time-windowed clearance
//!   of delayed-onset muscle soreness.
//! - **Question routing**: the q2/q3/tipping buckets consumed by the next
//!   survey.
//!
//! ## Processing model
//!
//! One athlete's state is loaded fully into memory, mutated synchronously,
//! and written back in a single persistence call guarded by an optimistic
//! version check. Across athletes, processing is embarrassingly parallel;
//! the [`batch::BatchRunner`] shards athletes across worker threads with a
//! per-athlete lock serializing the cycle within one athlete.
//!
//! ## Example
//!
//! ```rust
//! use chrono::Utc;
//! use tonus_ledger::config::LedgerConfig;
//! use tonus_ledger::models::{BodyPartLocation, Side, SorenessReport};
//! use tonus_ledger::processing::{SurveyProcessor, SurveySource};
//! use tonus_ledger::scoring::DefaultSorenessCalculator;
//! use tonus_ledger::state::AthleteBodyState;
//! use uuid::Uuid;
//!
//! # fn main() -> Result<(), tonus_ledger::errors::LedgerError> {
//! let scoring = DefaultSorenessCalculator;
//! let processor = SurveyProcessor::new(LedgerConfig::default(), &scoring);
//! let mut state = AthleteBodyState::new(Uuid::new_v4());
//!
//! let report = SorenessReport::new(BodyPartLocation::Quads, Side::Left, false, 3.0)?;
//! let outcome =
//!     processor.process_survey(&mut state, SurveySource::Readiness, &[report], Utc::now());
//! assert!(!outcome.severe_today);
//! # Ok(())
//! # }
//! ```

/// Canonical daily list construction
pub mod aggregation;
/// Athlete-sharded batch processing
pub mod batch;
/// Rolling retention of raw survey reports
pub mod buffering;
/// Thresholds and retention windows
pub mod config;
/// DOMS onset, reactivation, and clearance
pub mod doms;
/// Unified error types
pub mod errors;
/// Pending-status confirmation and running severity mean
pub mod historic_update;
/// Data models
pub mod models;
/// The survey intake orchestrator
pub mod processing;
/// Follow-up question routing
pub mod routing;
/// Severity-scoring collaborator interface
pub mod scoring;
/// The per-athlete aggregate
pub mod state;
/// Versioned state and cleared-soreness stores
pub mod store;

pub use config::LedgerConfig;
pub use errors::{LedgerError, LedgerResult};
pub use models::{
    BodyPartLocation, ClearedSoreness, HistoricSoreness, HistoricSorenessStatus, SeveritySample,
    Side, SorenessKey, SorenessReport,
};
pub use processing::{ProcessingOutcome, SurveyProcessor, SurveySource};
pub use routing::{FollowUpBuckets, FollowUpCandidate};
pub use scoring::{DefaultSorenessCalculator, SorenessScoring};
pub use state::AthleteBodyState;
pub use store::{
    ClearedSorenessStore, InMemoryClearedStore, InMemoryStateStore, StateStore, VersionedState,
};
