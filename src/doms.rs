// ABOUTME: Delayed-onset muscle soreness lifecycle - onset, reactivation, clearance
// ABOUTME: Independent of the persistent/acute ladder except for the shared record list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tonus Fitness Intelligence

//! # DOMS Lifecycle
//!
//! Ordinary (non-pain) muscle soreness cycles through its own dormant and
//! active states, outside the persistent/acute pain ladder. An active
//! episode keeps point samples of every report and clears after a quiet
//! window sized by the last reported severity: mild episodes need one
//! quiet day, stronger ones two.

use crate::config::DomsClearanceConfig;
use crate::models::{HistoricSoreness, HistoricSorenessStatus, SeveritySample, SorenessReport};
use crate::scoring::SorenessScoring;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Fold a soreness report into the DOMS lifecycle
///
/// Pain reports and reports against an already-classified record are
/// ignored; DOMS tracking never overrides the persistent/acute ladder.
pub fn apply_soreness(
    records: &mut Vec<HistoricSoreness>,
    report: &SorenessReport,
    scoring: &dyn SorenessScoring,
) {
    if report.is_pain {
        return;
    }
    let Some(reported) = report.reported_date_time else {
        return;
    };
    let derived = scoring.get_severity(report.severity, report.movement);
    let sample = SeveritySample {
        reported_date_time: reported,
        severity: report.severity,
        movement: report.movement,
    };

    if let Some(index) = records
        .iter()
        .position(|record| record.key() == report.key())
    {
        let record = &mut records[index];
        match record.status {
            HistoricSorenessStatus::Doms => {
                record.historic_severity.push(sample);
                record.last_reported_date_time = Some(reported);
                // Active DOMS reflects the current report, not a running mean.
                record.average_severity = derived;
                if record.max_severity < Some(derived) {
                    record.max_severity = Some(derived);
                    record.max_severity_date_time = Some(reported);
                }
            }
            HistoricSorenessStatus::DormantCleared => {
                debug!(
                    body_part = ?record.body_part_location,
                    side = ?record.side,
                    "reactivating dormant soreness as a fresh DOMS episode"
                );
                reset_episode(record, derived, reported, sample);
            }
            _ => {}
        }
    } else {
        let mut record =
            HistoricSoreness::new(report.body_part_location, report.side, report.is_pain);
        reset_episode(&mut record, derived, reported, sample);
        records.push(record);
    }
}

/// Initialize (or reinitialize) a record as a fresh DOMS episode
fn reset_episode(
    record: &mut HistoricSoreness,
    derived: f64,
    reported: DateTime<Utc>,
    sample: SeveritySample,
) {
    record.status = HistoricSorenessStatus::Doms;
    record.first_reported_date_time = Some(reported);
    record.last_reported_date_time = Some(reported);
    record.average_severity = derived;
    record.max_severity = Some(derived);
    record.max_severity_date_time = Some(reported);
    record.cleared_date_time = None;
    record.historic_severity = vec![sample];
}

/// Clear quiet DOMS episodes and evict every cleared record
///
/// For each active DOMS record the severity sample matching the last report
/// sets the clearance window; episodes quiet for at least that window are
/// stamped with `cleared_date_time`. The eviction that follows is global:
/// any record of any status carrying a `cleared_date_time` leaves the list.
/// Returns the records newly cleared by this pass, for the cleared-soreness
/// store.
pub fn clear_expired(
    records: &mut Vec<HistoricSoreness>,
    now: DateTime<Utc>,
    scoring: &dyn SorenessScoring,
    config: &DomsClearanceConfig,
) -> Vec<HistoricSoreness> {
    let mut newly_cleared = Vec::new();
    for record in records.iter_mut() {
        if record.status != HistoricSorenessStatus::Doms || record.cleared_date_time.is_some() {
            continue;
        }
        let Some(last_reported) = record.last_reported_date_time else {
            continue;
        };
        let derived = record
            .historic_severity
            .iter()
            .find(|sample| sample.reported_date_time == last_reported)
            .map_or(record.average_severity, |sample| {
                scoring.get_severity(sample.severity, sample.movement)
            });
        let window = if derived <= config.severity_pivot {
            config.short_window_days
        } else {
            config.long_window_days
        };
        let quiet_days = (now.date_naive() - last_reported.date_naive()).num_days();
        if quiet_days >= window {
            debug!(
                body_part = ?record.body_part_location,
                side = ?record.side,
                quiet_days,
                window,
                "DOMS episode cleared"
            );
            record.cleared_date_time = Some(now);
            newly_cleared.push(record.clone());
        }
    }
    records.retain(|record| record.cleared_date_time.is_none());
    newly_cleared
}
