// ABOUTME: Severity-scoring collaborator interface consumed by the ledger
// ABOUTME: SorenessScoring trait plus the default calculator implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tonus Fitness Intelligence

//! # Soreness Scoring Collaborator
//!
//! The ledger does not own severity derivation or cross-source merging; it
//! consumes them through [`SorenessScoring`]. The default implementation
//! reproduces production behavior: a movement-less report passes its raw
//! severity through, and merging keeps exactly one entry per
//! (body part, side, pain) key with the maximum severity winning.

use crate::models::SorenessReport;

/// Interface to the severity-derivation and report-merging collaborator
pub trait SorenessScoring: Send + Sync {
    /// Derive a normalized severity from the raw symptom axes
    fn get_severity(&self, severity: f64, movement: Option<f64>) -> f64;

    /// Merge an incoming report list into an existing one
    ///
    /// Contract: the result holds exactly one entry per
    /// (body part, side, pain) key. On a key collision the existing entry is
    /// kept and its severity raised to the maximum of the two.
    fn merge_reports(
        &self,
        existing: Vec<SorenessReport>,
        incoming: &[SorenessReport],
    ) -> Vec<SorenessReport>;
}

/// Default production scoring behavior
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSorenessCalculator;

impl SorenessScoring for DefaultSorenessCalculator {
    fn get_severity(&self, severity: f64, movement: Option<f64>) -> f64 {
        // Midpoint of the two axes when a movement qualifier is present,
        // kept at one decimal of survey resolution.
        movement.map_or(severity, |movement| {
            ((severity + movement) / 2.0 * 10.0).round() / 10.0
        })
    }

    fn merge_reports(
        &self,
        mut existing: Vec<SorenessReport>,
        incoming: &[SorenessReport],
    ) -> Vec<SorenessReport> {
        for report in incoming {
            if let Some(merged) = existing.iter_mut().find(|kept| kept.key() == report.key()) {
                merged.severity = merged.severity.max(report.severity);
            } else {
                existing.push(report.clone());
            }
        }
        existing
    }
}
