// ABOUTME: Raw soreness/pain report model from the survey subsystem
// ABOUTME: SorenessReport with validated severity/movement axes, SorenessKey
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tonus Fitness Intelligence

use crate::errors::{LedgerError, LedgerResult};
use crate::models::body_part::{BodyPartLocation, Side};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound of the survey severity and movement scales
const SCALE_MAX: f64 = 5.0;

/// Identity of a tracked body-status record
///
/// One `HistoricSoreness` record exists per distinct key; the same body part
/// reported as pain and as soreness tracks as two independent records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SorenessKey {
    /// Reported body part
    pub body_part_location: BodyPartLocation,
    /// Reported side
    pub side: Side,
    /// Whether the report is on the pain axis
    pub is_pain: bool,
}

/// A single raw soreness or pain report from a survey
///
/// Owned by the survey subsystem; the ledger only reads it. Severity and
/// the optional movement qualifier are validated against the 0-5 survey
/// scale at construction, replacing ad-hoc assignment interception with a
/// typed error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SorenessReport {
    /// Reported body part
    pub body_part_location: BodyPartLocation,
    /// Reported side
    pub side: Side,
    /// Pain (true) vs ordinary soreness (false)
    pub is_pain: bool,
    /// Reported severity on the 0-5 scale
    pub severity: f64,
    /// Optional movement-limitation qualifier on the 0-5 scale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movement: Option<f64>,
    /// When the athlete submitted the report; undated reports never enter retention
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reported_date_time: Option<DateTime<Utc>>,
}

impl SorenessReport {
    /// Build a report, validating the severity against the survey scale
    ///
    /// # Errors
    /// Returns [`LedgerError::SeverityOutOfRange`] when severity is outside 0-5
    pub fn new(
        body_part_location: BodyPartLocation,
        side: Side,
        is_pain: bool,
        severity: f64,
    ) -> LedgerResult<Self> {
        if !(0.0..=SCALE_MAX).contains(&severity) {
            return Err(LedgerError::SeverityOutOfRange { value: severity });
        }
        Ok(Self {
            body_part_location,
            side,
            is_pain,
            severity,
            movement: None,
            reported_date_time: None,
        })
    }

    /// Attach a movement qualifier
    ///
    /// # Errors
    /// Returns [`LedgerError::MovementOutOfRange`] when movement is outside 0-5
    pub fn with_movement(mut self, movement: f64) -> LedgerResult<Self> {
        if !(0.0..=SCALE_MAX).contains(&movement) {
            return Err(LedgerError::MovementOutOfRange { value: movement });
        }
        self.movement = Some(movement);
        Ok(self)
    }

    /// Attach the submission timestamp
    #[must_use]
    pub const fn with_reported_date_time(mut self, reported: DateTime<Utc>) -> Self {
        self.reported_date_time = Some(reported);
        self
    }

    /// Identity key of this report
    #[must_use]
    pub const fn key(&self) -> SorenessKey {
        SorenessKey {
            body_part_location: self.body_part_location,
            side: self.side,
            is_pain: self.is_pain,
        }
    }

    /// Whether the report was submitted on the given calendar day
    #[must_use]
    pub fn reported_on(&self, date: NaiveDate) -> bool {
        self.reported_date_time
            .is_some_and(|reported| reported.date_naive() == date)
    }
}
