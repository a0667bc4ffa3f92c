// ABOUTME: Historic ledger update - pending status confirmation and running mean
// ABOUTME: Pure state transition with same-day revision correction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tonus Fitness Intelligence

//! # Historic Ledger Update
//!
//! The core mutation of the ledger, expressed as a pure transition from one
//! [`HistoricSoreness`] value to the next. Two paths exist:
//!
//! - **New day**: only the four pending statuses may advance to their
//!   confirmed counterpart; everything else is a complete no-op. The ledger
//!   never invents a promotion on its own - entry into the `almost_*`
//!   stages belongs to the nightly statistics job.
//! - **Same day**: a higher-severity revision of an already-counted day is
//!   folded in by mathematically undoing the earlier contribution, so one
//!   calendar day always contributes exactly once to the running mean.

use crate::models::{HistoricSoreness, HistoricSorenessStatus, SorenessReport};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Round a running mean to the two decimals the ledger persists
pub(crate) fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fold one more daily observation into a running mean
fn fold_into_mean(average: f64, streak: u32, severity: f64) -> f64 {
    let count = f64::from(streak);
    average * count / (count + 1.0) + severity / (count + 1.0)
}

/// The confirmed status a pending record advances to, if any
///
/// Axis-gated: pain reports advance only the pain-side pending statuses,
/// soreness reports only the soreness-side ones.
const fn advanced_status(
    status: HistoricSorenessStatus,
    pain_axis: bool,
) -> Option<HistoricSorenessStatus> {
    if pain_axis {
        match status {
            HistoricSorenessStatus::AlmostPersistentPain => {
                Some(HistoricSorenessStatus::PersistentPain)
            }
            HistoricSorenessStatus::AlmostPersistent2Pain
            | HistoricSorenessStatus::AlmostPersistent2PainAcute => {
                Some(HistoricSorenessStatus::Persistent2Pain)
            }
            _ => None,
        }
    } else {
        match status {
            HistoricSorenessStatus::AlmostPersistentSoreness => {
                Some(HistoricSorenessStatus::PersistentSoreness)
            }
            HistoricSorenessStatus::AlmostPersistent2Soreness => {
                Some(HistoricSorenessStatus::Persistent2Soreness)
            }
            _ => None,
        }
    }
}

/// Apply one report to a ledger record, returning the updated record
///
/// `prior_daily_severity` is the severity already recorded for this key in
/// the canonical daily list for the event day, when one exists; it is the
/// reference for the same-day correction path.
#[must_use]
pub fn apply_report(
    record: &HistoricSoreness,
    report: &SorenessReport,
    event_date_time: DateTime<Utc>,
    prior_daily_severity: Option<f64>,
) -> HistoricSoreness {
    let mut updated = record.clone();
    if record.last_reported_on(event_date_time.date_naive()) {
        revise_same_day(&mut updated, report, prior_daily_severity);
    } else {
        advance_pending(&mut updated, report, event_date_time);
    }
    updated
}

/// New-day path: confirm a pending status and fold the observation in
fn advance_pending(
    record: &mut HistoricSoreness,
    report: &SorenessReport,
    event_date_time: DateTime<Utc>,
) {
    let Some(confirmed) = advanced_status(record.status, report.is_pain) else {
        return;
    };
    debug!(
        body_part = ?record.body_part_location,
        side = ?record.side,
        from = ?record.status,
        to = ?confirmed,
        "pending status confirmed by qualifying report"
    );
    record.status = confirmed;
    record.last_reported_date_time = Some(event_date_time);
    record.average_severity = round_two(fold_into_mean(
        record.average_severity,
        record.streak,
        report.severity,
    ));
    record.streak += 1;
}

/// Same-day path: replace the earlier contribution when the revision is worse
fn revise_same_day(
    record: &mut HistoricSoreness,
    report: &SorenessReport,
    prior_daily_severity: Option<f64>,
) {
    // DOMS averages are overwritten per report, never streak-folded;
    // the independent DOMS lifecycle owns those records.
    if record.status == HistoricSorenessStatus::Doms {
        return;
    }
    let Some(prior) = prior_daily_severity else {
        return;
    };
    if prior >= report.severity {
        return;
    }
    if record.streak <= 1 {
        // A single-day streak leaves nothing to subtract out; replace the
        // average outright with the revised severity.
        warn!(
            body_part = ?record.body_part_location,
            streak = record.streak,
            "same-day revision on a single-day streak, replacing average outright"
        );
        record.average_severity = round_two(report.severity);
        return;
    }
    let reduced_streak = record.streak - 1;
    let without_prior =
        (record.average_severity * f64::from(record.streak) - prior) / f64::from(reduced_streak);
    record.average_severity = round_two(fold_into_mean(
        without_prior,
        reduced_streak,
        report.severity,
    ));
    debug!(
        body_part = ?record.body_part_location,
        side = ?record.side,
        prior,
        revised = report.severity,
        "same-day revision folded into running mean"
    );
}
