// ABOUTME: Versioned state store and cleared-soreness store interfaces
// ABOUTME: Optimistic-concurrency contract plus in-memory implementations for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tonus Fitness Intelligence

//! # Ledger Stores
//!
//! Persistence adapters live outside this crate; these traits pin down the
//! contract they must satisfy. The important part is the version check on
//! write: a nightly batch and a real-time survey handler may both touch the
//! same athlete, and a save against a stale version must fail loudly rather
//! than silently lose an update.

use crate::errors::{LedgerError, LedgerResult};
use crate::models::ClearedSoreness;
use crate::state::AthleteBodyState;
use dashmap::DashMap;
use tracing::warn;
use uuid::Uuid;

/// An athlete state together with its storage version
#[derive(Debug, Clone)]
pub struct VersionedState {
    /// The athlete's body state
    pub state: AthleteBodyState,
    /// Monotonic version, bumped on every successful save
    pub version: u64,
}

/// Storage contract for athlete body states
pub trait StateStore: Send + Sync {
    /// Load an athlete's state and its current version
    ///
    /// # Errors
    /// Returns [`LedgerError::StateNotFound`] when the athlete is unknown
    fn load(&self, athlete_id: Uuid) -> LedgerResult<VersionedState>;

    /// Save an athlete's state, failing on a version mismatch
    ///
    /// # Errors
    /// Returns [`LedgerError::VersionConflict`] when another writer saved
    /// since `expected_version` was loaded
    fn save(&self, state: &AthleteBodyState, expected_version: u64) -> LedgerResult<u64>;
}

/// Storage contract for records evicted by the clearance rule
pub trait ClearedSorenessStore: Send + Sync {
    /// Persist a batch of cleared records
    ///
    /// # Errors
    /// Returns [`LedgerError::Store`] when the backing store rejects the batch
    fn put_cleared(&self, cleared: &[ClearedSoreness]) -> LedgerResult<()>;
}

/// In-memory state store with the full optimistic-concurrency behavior
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    states: DashMap<Uuid, VersionedState>,
}

impl InMemoryStateStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an athlete's state at version 1
    pub fn seed(&self, state: AthleteBodyState) {
        self.states
            .insert(state.athlete_id, VersionedState { state, version: 1 });
    }
}

impl StateStore for InMemoryStateStore {
    fn load(&self, athlete_id: Uuid) -> LedgerResult<VersionedState> {
        self.states
            .get(&athlete_id)
            .map(|entry| entry.value().clone())
            .ok_or(LedgerError::StateNotFound { athlete_id })
    }

    fn save(&self, state: &AthleteBodyState, expected_version: u64) -> LedgerResult<u64> {
        let athlete_id = state.athlete_id;
        let mut entry =
            self.states
                .get_mut(&athlete_id)
                .ok_or(LedgerError::StateNotFound { athlete_id })?;
        if entry.version != expected_version {
            warn!(
                %athlete_id,
                expected = expected_version,
                actual = entry.version,
                "rejecting stale ledger write"
            );
            return Err(LedgerError::VersionConflict {
                athlete_id,
                expected: expected_version,
                actual: entry.version,
            });
        }
        entry.state = state.clone();
        entry.version += 1;
        Ok(entry.version)
    }
}

/// In-memory cleared-soreness store, keyed by athlete
#[derive(Debug, Default)]
pub struct InMemoryClearedStore {
    cleared: DashMap<Uuid, Vec<ClearedSoreness>>,
}

impl InMemoryClearedStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cleared records stored for an athlete
    #[must_use]
    pub fn cleared_for(&self, athlete_id: Uuid) -> Vec<ClearedSoreness> {
        self.cleared
            .get(&athlete_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }
}

impl ClearedSorenessStore for InMemoryClearedStore {
    fn put_cleared(&self, cleared: &[ClearedSoreness]) -> LedgerResult<()> {
        for record in cleared {
            self.cleared
                .entry(record.athlete_id)
                .or_default()
                .push(record.clone());
        }
        Ok(())
    }
}
