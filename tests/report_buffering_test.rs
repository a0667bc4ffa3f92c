// ABOUTME: Unit tests for report buffering and daily aggregation
// ABOUTME: Rolling retention windows, cross-source merging, severe-day gate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tonus Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tonus_ledger::aggregation::rebuild_daily;
use tonus_ledger::buffering::persist;
use tonus_ledger::config::LedgerConfig;
use tonus_ledger::models::{BodyPartLocation, Side, SorenessReport};
use tonus_ledger::scoring::{DefaultSorenessCalculator, SorenessScoring};
use tonus_ledger::state::AthleteBodyState;
use uuid::Uuid;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2018, 12, day).unwrap()
}

fn datetime(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 12, day, hour, 0, 0).unwrap()
}

fn dated_report(
    location: BodyPartLocation,
    is_pain: bool,
    severity: f64,
    reported: DateTime<Utc>,
) -> SorenessReport {
    SorenessReport::new(location, Side::Left, is_pain, severity)
        .unwrap()
        .with_reported_date_time(reported)
}

#[test]
fn test_persist_keeps_today_and_yesterday_only() {
    let existing = vec![
        dated_report(BodyPartLocation::Quads, false, 4.0, datetime(1, 12)),
        dated_report(BodyPartLocation::Quads, false, 3.0, datetime(2, 12)),
    ];
    let new_reports = vec![dated_report(BodyPartLocation::Quads, false, 2.0, datetime(3, 9))];

    let buffer = persist(&existing, &new_reports, date(3), 1);

    assert_eq!(buffer.len(), 2);
    assert!((buffer[0].severity - 3.0).abs() < f64::EPSILON);
    assert!((buffer[1].severity - 2.0).abs() < f64::EPSILON);
}

#[test]
fn test_persist_drops_undated_entries() {
    let undated = SorenessReport::new(BodyPartLocation::Quads, Side::Left, false, 3.0).unwrap();
    let existing = vec![undated.clone()];
    let new_reports = vec![undated];

    let buffer = persist(&existing, &new_reports, date(3), 1);

    assert!(buffer.is_empty());
}

#[test]
fn test_daily_rebuild_replaces_expired_soreness() {
    // An entry from two days ago falls out of the window; today's report
    // becomes the canonical severity.
    let existing_daily = vec![dated_report(BodyPartLocation::Ankle, false, 4.0, datetime(1, 12))];
    let readiness = vec![dated_report(BodyPartLocation::Ankle, false, 2.0, datetime(3, 17))];

    let daily = rebuild_daily(
        &existing_daily,
        &readiness,
        &[],
        date(3),
        1,
        &DefaultSorenessCalculator,
    );

    assert_eq!(daily.len(), 1);
    assert!((daily[0].severity - 2.0).abs() < f64::EPSILON);
}

#[test]
fn test_daily_rebuild_keeps_consecutive_day_maximum() {
    // Yesterday's severity-4 entry still dominates a milder report today.
    let existing_daily = vec![dated_report(BodyPartLocation::Ankle, false, 4.0, datetime(2, 12))];
    let readiness = vec![dated_report(BodyPartLocation::Ankle, false, 2.0, datetime(3, 17))];

    let daily = rebuild_daily(
        &existing_daily,
        &readiness,
        &[],
        date(3),
        1,
        &DefaultSorenessCalculator,
    );

    assert_eq!(daily.len(), 1);
    assert!((daily[0].severity - 4.0).abs() < f64::EPSILON);
}

#[test]
fn test_daily_rebuild_merges_both_sources() {
    let readiness = vec![dated_report(BodyPartLocation::Quads, false, 2.0, datetime(3, 8))];
    let post_session = vec![
        dated_report(BodyPartLocation::Quads, false, 5.0, datetime(3, 18)),
        dated_report(BodyPartLocation::Calves, false, 3.0, datetime(3, 18)),
    ];

    let daily = rebuild_daily(
        &[],
        &readiness,
        &post_session,
        date(3),
        1,
        &DefaultSorenessCalculator,
    );

    assert_eq!(daily.len(), 2);
    let quads = daily
        .iter()
        .find(|r| r.body_part_location == BodyPartLocation::Quads)
        .unwrap();
    assert!((quads.severity - 5.0).abs() < f64::EPSILON);
}

#[test]
fn test_merge_keeps_one_entry_per_key() {
    let calculator = DefaultSorenessCalculator;
    let existing = vec![
        dated_report(BodyPartLocation::Quads, false, 2.0, datetime(3, 8)),
        dated_report(BodyPartLocation::Quads, true, 1.0, datetime(3, 8)),
    ];
    let incoming = vec![dated_report(BodyPartLocation::Quads, false, 4.0, datetime(3, 12))];

    let merged = calculator.merge_reports(existing, &incoming);

    assert_eq!(merged.len(), 2);
    let soreness = merged.iter().find(|r| !r.is_pain).unwrap();
    assert!((soreness.severity - 4.0).abs() < f64::EPSILON);
}

#[test]
fn test_get_severity_passes_through_without_movement() {
    let calculator = DefaultSorenessCalculator;
    assert!((calculator.get_severity(3.0, None) - 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_get_severity_blends_movement_axis() {
    let calculator = DefaultSorenessCalculator;
    assert!((calculator.get_severity(1.0, Some(4.0)) - 2.5).abs() < f64::EPSILON);
}

#[test]
fn test_severe_today_requires_threshold_severity() {
    let config = LedgerConfig::default();
    let mut state = AthleteBodyState::new(Uuid::new_v4());
    state.daily_severe_pain = vec![dated_report(BodyPartLocation::Knee, true, 2.5, datetime(3, 8))];
    state.daily_severe_soreness =
        vec![dated_report(BodyPartLocation::Quads, false, 3.5, datetime(3, 8))];

    assert!(!state.has_severe_today(&config));

    state.daily_severe_pain[0].severity = 3.0;
    assert!(state.has_severe_today(&config));
}

#[test]
fn test_severe_today_counts_strong_soreness() {
    let config = LedgerConfig::default();
    let mut state = AthleteBodyState::new(Uuid::new_v4());
    state.daily_severe_soreness =
        vec![dated_report(BodyPartLocation::Quads, false, 4.0, datetime(3, 8))];

    assert!(state.has_severe_today(&config));
}

#[test]
fn test_severity_validation_rejects_out_of_scale() {
    assert!(SorenessReport::new(BodyPartLocation::Quads, Side::Left, false, 6.0).is_err());
    assert!(SorenessReport::new(BodyPartLocation::Quads, Side::Left, false, -1.0).is_err());
    assert!(SorenessReport::new(BodyPartLocation::Quads, Side::Left, false, 5.0).is_ok());
}
