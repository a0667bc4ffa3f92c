// ABOUTME: Unified error types for the body-status ledger
// ABOUTME: Typed construction, lookup, and optimistic-concurrency failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tonus Fitness Intelligence

//! # Ledger Error Handling
//!
//! The ledger favors silent no-ops over errors for "not yet eligible"
//! conditions (a report against a non-pending status, an unknown pain-axis
//! body part). Errors are reserved for the places where something is
//! genuinely wrong: malformed input at construction time, a missing athlete
//! state, or a stale write detected by the optimistic version check.

use thiserror::Error;
use uuid::Uuid;

/// Unified error type for ledger operations
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Reported severity falls outside the 0-5 survey scale
    #[error("severity {value} is outside the 0-5 reporting scale")]
    SeverityOutOfRange {
        /// The rejected severity value
        value: f64,
    },

    /// Reported movement qualifier falls outside the 0-5 survey scale
    #[error("movement {value} is outside the 0-5 reporting scale")]
    MovementOutOfRange {
        /// The rejected movement value
        value: f64,
    },

    /// No body state is stored for the requested athlete
    #[error("no body state stored for athlete {athlete_id}")]
    StateNotFound {
        /// Athlete whose state was requested
        athlete_id: Uuid,
    },

    /// A save raced with another writer and lost
    #[error("stale write for athlete {athlete_id}: expected version {expected}, found {actual}")]
    VersionConflict {
        /// Athlete whose state was being written
        athlete_id: Uuid,
        /// Version the writer loaded
        expected: u64,
        /// Version currently stored
        actual: u64,
    },

    /// A backing store rejected an operation
    #[error("store failure: {reason}")]
    Store {
        /// Store-reported failure description
        reason: String,
    },
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
