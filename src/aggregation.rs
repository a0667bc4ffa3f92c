// ABOUTME: Canonical daily list construction from the raw source buffers
// ABOUTME: Folds readiness and post-session reports through the merge collaborator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tonus Fitness Intelligence

//! # Daily Aggregation
//!
//! Builds the canonical "daily severe" list for one axis (soreness or
//! pain): the deduplicated, per-body-part official severity after merging
//! all survey sources. This list is the single reference consulted by the
//! same-day correction path of the historic ledger update.

use crate::buffering::within_window;
use crate::models::SorenessReport;
use crate::scoring::SorenessScoring;
use chrono::NaiveDate;

/// Rebuild the canonical daily list for one axis
///
/// Starts from the previous canonical list filtered to the retention
/// window, then folds in the readiness buffer and the post-session buffer
/// through the merge collaborator. The merge contract guarantees one entry
/// per (body part, side, pain) key with the most severe report winning.
#[must_use]
pub fn rebuild_daily(
    existing_daily: &[SorenessReport],
    readiness: &[SorenessReport],
    post_session: &[SorenessReport],
    event_date: NaiveDate,
    retention_days: i64,
    scoring: &dyn SorenessScoring,
) -> Vec<SorenessReport> {
    let kept: Vec<SorenessReport> = existing_daily
        .iter()
        .filter(|report| within_window(report, event_date, retention_days))
        .cloned()
        .collect();
    let merged = scoring.merge_reports(kept, readiness);
    scoring.merge_reports(merged, post_session)
}
