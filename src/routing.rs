// ABOUTME: Survey question routing - q2/q3/tipping bucket partition
// ABOUTME: Priority-ordered deduplication keyed by body part and side
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tonus Fitness Intelligence

//! # Question Routing
//!
//! Partitions the historic-soreness list into the three prioritized
//! buckets the next daily survey consumes:
//!
//! - **q3** (highest priority): records with a pending confirmation
//!   question.
//! - **tipping**: records sitting just below an escalation threshold.
//! - **q2**: every other standing record that is not dormant.
//!
//! Buckets are pairwise disjoint by (body part, side). When the same body
//! part shows up on both axes, the pain record upgrades the stored entry in
//! place instead of inserting a duplicate.

use crate::models::{BodyPartLocation, HistoricSoreness, HistoricSorenessStatus, Side};
use serde::{Deserialize, Serialize};

/// A body part routed to a follow-up question
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FollowUpCandidate {
    /// Body part to ask about
    pub body_part_location: BodyPartLocation,
    /// Side to ask about
    pub side: Side,
    /// Whether the routed record is on the pain axis
    pub is_pain: bool,
    /// Status carried to the survey for question wording
    pub status: HistoricSorenessStatus,
}

impl FollowUpCandidate {
    fn from_record(record: &HistoricSoreness) -> Self {
        Self {
            body_part_location: record.body_part_location,
            side: record.side,
            is_pain: record.is_pain,
            status: record.status,
        }
    }

    const fn part(&self) -> (BodyPartLocation, Side) {
        (self.body_part_location, self.side)
    }
}

/// The three prioritized follow-up buckets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FollowUpBuckets {
    /// Standing/background records
    pub q2: Vec<FollowUpCandidate>,
    /// Records with an explicit confirmation pending (highest priority)
    pub q3: Vec<FollowUpCandidate>,
    /// Near-threshold pre-escalation records
    pub tipping: Vec<FollowUpCandidate>,
}

/// Partition the historic-soreness list into the three follow-up buckets
#[must_use]
pub fn follow_up_buckets(records: &[HistoricSoreness]) -> FollowUpBuckets {
    let mut buckets = FollowUpBuckets::default();

    // Confirmation questions claim their body parts first.
    for record in records {
        if record.ask_persistent_2_question || record.ask_acute_pain_question {
            insert_or_upgrade(&mut buckets.q3, record);
        }
    }

    for record in records {
        if record.ask_persistent_2_question || record.ask_acute_pain_question {
            continue;
        }
        let part = (record.body_part_location, record.side);
        if holds_part(&buckets.q3, part) {
            continue;
        }
        if record.status.is_tipping() {
            if holds_part(&buckets.q2, part) {
                upgrade_in_place(&mut buckets.q2, record);
            } else {
                insert_or_upgrade(&mut buckets.tipping, record);
            }
        } else if record.status != HistoricSorenessStatus::DormantCleared {
            if holds_part(&buckets.tipping, part) {
                upgrade_in_place(&mut buckets.tipping, record);
            } else {
                insert_or_upgrade(&mut buckets.q2, record);
            }
        }
    }
    buckets
}

fn holds_part(bucket: &[FollowUpCandidate], part: (BodyPartLocation, Side)) -> bool {
    bucket.iter().any(|candidate| candidate.part() == part)
}

/// Insert into a bucket, or upgrade the stored entry when pain trumps soreness
fn insert_or_upgrade(bucket: &mut Vec<FollowUpCandidate>, record: &HistoricSoreness) {
    let part = (record.body_part_location, record.side);
    if bucket.iter().any(|candidate| candidate.part() == part) {
        upgrade_in_place(bucket, record);
    } else {
        bucket.push(FollowUpCandidate::from_record(record));
    }
}

/// Upgrade a stored soreness entry to the incoming pain record's axis/status
fn upgrade_in_place(bucket: &mut [FollowUpCandidate], record: &HistoricSoreness) {
    let part = (record.body_part_location, record.side);
    if let Some(stored) = bucket.iter_mut().find(|candidate| candidate.part() == part) {
        if record.is_pain && !stored.is_pain {
            stored.is_pain = true;
            stored.status = record.status;
        }
    }
}
