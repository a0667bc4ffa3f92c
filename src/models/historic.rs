// ABOUTME: Historic soreness ledger record and the multi-stage status enum
// ABOUTME: HistoricSorenessStatus, SeveritySample, HistoricSoreness, ClearedSoreness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tonus Fitness Intelligence

use crate::models::body_part::{BodyPartLocation, Side};
use crate::models::report::SorenessKey;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Multi-stage classification of a tracked body part
///
/// The `almost_*` stages are provisional: they are entered by the nightly
/// statistics job and either confirmed by the ledger on the next qualifying
/// report or resolved through an explicit follow-up question.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HistoricSorenessStatus {
    /// No active episode
    DormantCleared,
    /// Confirmed persistent pain
    PersistentPain,
    /// Escalated stage-2 persistent pain
    #[serde(rename = "persistent_2_pain")]
    Persistent2Pain,
    /// Pending persistent pain, awaiting one more qualifying report
    AlmostPersistentPain,
    /// Pending stage-2 persistent pain
    #[serde(rename = "almost_persistent_2_pain")]
    AlmostPersistent2Pain,
    /// Pending stage-2 persistent pain reached from an acute-pain episode
    #[serde(rename = "almost_persistent_2_pain_acute")]
    AlmostPersistent2PainAcute,
    /// Confirmed persistent soreness
    PersistentSoreness,
    /// Escalated stage-2 persistent soreness
    #[serde(rename = "persistent_2_soreness")]
    Persistent2Soreness,
    /// Pending persistent soreness
    AlmostPersistentSoreness,
    /// Pending stage-2 persistent soreness
    #[serde(rename = "almost_persistent_2_soreness")]
    AlmostPersistent2Soreness,
    /// Confirmed acute pain
    AcutePain,
    /// Pending acute pain
    AlmostAcutePain,
    /// Delayed-onset muscle soreness episode
    Doms,
}

impl HistoricSorenessStatus {
    /// Whether this status belongs to the acute-pain family
    #[must_use]
    pub const fn is_acute_pain(self) -> bool {
        matches!(self, Self::AcutePain | Self::AlmostPersistent2PainAcute)
    }

    /// Whether this status is one of the near-threshold pre-escalation stages
    #[must_use]
    pub const fn is_tipping(self) -> bool {
        matches!(
            self,
            Self::AlmostPersistentPain | Self::AlmostPersistentSoreness | Self::AlmostAcutePain
        )
    }
}

/// A point-in-time severity observation kept for the DOMS lifecycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveritySample {
    /// When the observation was reported
    pub reported_date_time: DateTime<Utc>,
    /// Raw reported severity
    pub severity: f64,
    /// Raw reported movement qualifier, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movement: Option<f64>,
}

/// The per-body-part ledger record
///
/// One record exists per distinct (body part, side, pain) key. Created on
/// first report, destroyed only through the DOMS clearance rule; confirmed
/// persistent and acute records are never deleted by the ledger itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricSoreness {
    /// Tracked body part
    pub body_part_location: BodyPartLocation,
    /// Tracked side
    pub side: Side,
    /// Pain axis (true) vs soreness axis (false)
    pub is_pain: bool,
    /// Current classification
    pub status: HistoricSorenessStatus,
    /// Count of distinct qualifying days folded into the running average
    pub streak: u32,
    /// Running mean severity over exactly `streak` daily observations
    pub average_severity: f64,
    /// Highest derived severity seen during the current episode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_severity: Option<f64>,
    /// When the maximum was observed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_severity_date_time: Option<DateTime<Utc>>,
    /// First report of the current episode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_reported_date_time: Option<DateTime<Utc>>,
    /// Most recent report folded into this record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reported_date_time: Option<DateTime<Utc>>,
    /// Set once by the clearance rule; the record is evicted afterward
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleared_date_time: Option<DateTime<Utc>>,
    /// Point samples, populated only for the DOMS lifecycle
    pub historic_severity: Vec<SeveritySample>,
    /// A pending acute-pain confirmation question for the next survey
    pub ask_acute_pain_question: bool,
    /// A pending stage-2 confirmation question for the next survey
    pub ask_persistent_2_question: bool,
}

impl HistoricSoreness {
    /// Create a fresh record for a never-before-seen key
    #[must_use]
    pub const fn new(body_part_location: BodyPartLocation, side: Side, is_pain: bool) -> Self {
        Self {
            body_part_location,
            side,
            is_pain,
            status: HistoricSorenessStatus::DormantCleared,
            streak: 0,
            average_severity: 0.0,
            max_severity: None,
            max_severity_date_time: None,
            first_reported_date_time: None,
            last_reported_date_time: None,
            cleared_date_time: None,
            historic_severity: Vec::new(),
            ask_acute_pain_question: false,
            ask_persistent_2_question: false,
        }
    }

    /// Identity key of this record
    #[must_use]
    pub const fn key(&self) -> SorenessKey {
        SorenessKey {
            body_part_location: self.body_part_location,
            side: self.side,
            is_pain: self.is_pain,
        }
    }

    /// Whether this record was last folded on the given calendar day
    #[must_use]
    pub fn last_reported_on(&self, date: NaiveDate) -> bool {
        self.last_reported_date_time
            .is_some_and(|last| last.date_naive() == date)
    }
}

/// A cleared record paired with its owning athlete, handed to the
/// cleared-soreness store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearedSoreness {
    /// Athlete the record belonged to
    pub athlete_id: Uuid,
    /// The evicted record, `cleared_date_time` set
    pub record: HistoricSoreness,
}
