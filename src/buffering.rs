// ABOUTME: Rolling retention of raw survey reports
// ABOUTME: Pure persist function applied to the four source buffers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tonus Fitness Intelligence

//! # Report Buffering
//!
//! Raw soreness/pain reports from the readiness and post-session surveys
//! are kept in rolling buffers no older than the retention window.
//! Undated reports never survive a pass through retention.

use crate::models::SorenessReport;
use chrono::NaiveDate;

/// Retain recent entries and append the new batch
///
/// Keeps entries whose report date is within `retention_days` of
/// `event_date` (1 means today and yesterday), drops anything undated,
/// then appends the dated entries of `new_reports`. The result fully
/// replaces the corresponding buffer.
#[must_use]
pub fn persist(
    existing: &[SorenessReport],
    new_reports: &[SorenessReport],
    event_date: NaiveDate,
    retention_days: i64,
) -> Vec<SorenessReport> {
    let mut retained: Vec<SorenessReport> = existing
        .iter()
        .filter(|report| within_window(report, event_date, retention_days))
        .cloned()
        .collect();
    retained.extend(
        new_reports
            .iter()
            .filter(|report| report.reported_date_time.is_some())
            .cloned(),
    );
    retained
}

/// Whether a dated report falls inside the retention window
pub(crate) fn within_window(
    report: &SorenessReport,
    event_date: NaiveDate,
    retention_days: i64,
) -> bool {
    report
        .reported_date_time
        .is_some_and(|reported| (event_date - reported.date_naive()).num_days() <= retention_days)
}
