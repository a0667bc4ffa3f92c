// ABOUTME: Criterion benchmarks for the body-status ledger
// ABOUTME: Measures historic updates, question routing, and the full survey cycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tonus Fitness Intelligence

//! Criterion benchmarks for the ledger's hot paths: the historic update,
//! the q2/q3/tipping partition, and a complete survey processing cycle.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::{DateTime, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tonus_ledger::config::LedgerConfig;
use tonus_ledger::historic_update::apply_report;
use tonus_ledger::models::{
    BodyPartLocation, HistoricSoreness, HistoricSorenessStatus, Side, SorenessReport,
};
use tonus_ledger::processing::{SurveyProcessor, SurveySource};
use tonus_ledger::routing::follow_up_buckets;
use tonus_ledger::scoring::DefaultSorenessCalculator;
use tonus_ledger::state::AthleteBodyState;
use uuid::Uuid;

const LOCATIONS: [BodyPartLocation; 8] = [
    BodyPartLocation::Quads,
    BodyPartLocation::Hamstrings,
    BodyPartLocation::Calves,
    BodyPartLocation::Glutes,
    BodyPartLocation::Knee,
    BodyPartLocation::Ankle,
    BodyPartLocation::LowerBack,
    BodyPartLocation::Shoulder,
];

const STATUSES: [HistoricSorenessStatus; 4] = [
    HistoricSorenessStatus::AlmostPersistentPain,
    HistoricSorenessStatus::PersistentSoreness,
    HistoricSorenessStatus::Doms,
    HistoricSorenessStatus::AlmostAcutePain,
];

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 7, 1, 9, 0, 0).unwrap()
}

fn synthetic_records(count: usize) -> Vec<HistoricSoreness> {
    (0..count)
        .map(|index| {
            let side = if index % 2 == 0 { Side::Left } else { Side::Right };
            let mut record =
                HistoricSoreness::new(LOCATIONS[index % LOCATIONS.len()], side, index % 3 == 0);
            record.status = STATUSES[index % STATUSES.len()];
            record.streak = (index % 7) as u32;
            record.average_severity = 1.0 + (index % 4) as f64;
            record.last_reported_date_time = Some(base_time());
            record
        })
        .collect()
}

fn bench_historic_update(c: &mut Criterion) {
    let mut record = HistoricSoreness::new(BodyPartLocation::Ankle, Side::Left, true);
    record.status = HistoricSorenessStatus::AlmostPersistentPain;
    record.streak = 12;
    record.average_severity = 2.4;
    record.last_reported_date_time = Some(base_time());
    let report = SorenessReport::new(BodyPartLocation::Ankle, Side::Left, true, 4.0).unwrap();
    let next_day = Utc.with_ymd_and_hms(2026, 7, 2, 9, 0, 0).unwrap();

    c.bench_function("historic_update/confirm_pending", |b| {
        b.iter(|| apply_report(black_box(&record), black_box(&report), next_day, None));
    });
}

fn bench_question_routing(c: &mut Criterion) {
    let records = synthetic_records(64);

    c.bench_function("routing/follow_up_buckets_64", |b| {
        b.iter(|| follow_up_buckets(black_box(&records)));
    });
}

fn bench_survey_cycle(c: &mut Criterion) {
    let scoring = DefaultSorenessCalculator;
    let processor = SurveyProcessor::new(LedgerConfig::default(), &scoring);
    let reports: Vec<SorenessReport> = LOCATIONS
        .iter()
        .enumerate()
        .map(|(index, location)| {
            SorenessReport::new(*location, Side::Left, index % 3 == 0, 2.0 + (index % 3) as f64)
                .unwrap()
        })
        .collect();

    c.bench_function("processing/full_readiness_cycle", |b| {
        b.iter_with_setup(
            || {
                let mut state = AthleteBodyState::new(Uuid::new_v4());
                state.historic_soreness = synthetic_records(32);
                state
            },
            |mut state| {
                processor.process_survey(
                    &mut state,
                    SurveySource::Readiness,
                    black_box(&reports),
                    base_time(),
                );
                state
            },
        );
    });
}

criterion_group!(
    benches,
    bench_historic_update,
    bench_question_routing,
    bench_survey_cycle
);
criterion_main!(benches);
