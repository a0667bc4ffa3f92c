// ABOUTME: Threshold and retention configuration for the body-status ledger
// ABOUTME: Rolling-window lengths, severe-day gates, and DOMS clearance windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tonus Fitness Intelligence

//! Ledger Configuration
//!
//! Groups every tunable window and threshold the ledger consults. Defaults
//! match production survey behavior: raw reports are retained for today and
//! yesterday, a "severe day" means pain at 3+ or soreness at 4+, and DOMS
//! clears after one quiet day for mild episodes or two for stronger ones.

use serde::{Deserialize, Serialize};

/// Top-level ledger configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Rolling-window lengths for report retention
    pub retention: RetentionConfig,
    /// Severity gates for the "is today bad" signal
    pub severe_thresholds: SevereThresholds,
    /// DOMS clearance windows
    pub doms_clearance: DomsClearanceConfig,
}

/// Rolling-window lengths for report retention
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetentionConfig {
    /// Days of raw survey reports kept in the source buffers (1 = today and yesterday)
    pub raw_report_days: i64,
    /// Days a canonical daily entry stays eligible for re-merging
    pub daily_report_days: i64,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            raw_report_days: 1,
            daily_report_days: 1,
        }
    }
}

/// Severity gates counting toward the severe-day signal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SevereThresholds {
    /// Minimum pain severity counted as severe
    pub pain_severity: f64,
    /// Minimum soreness severity counted as severe
    pub soreness_severity: f64,
}

impl Default for SevereThresholds {
    fn default() -> Self {
        Self {
            pain_severity: 3.0,
            soreness_severity: 4.0,
        }
    }
}

/// DOMS clearance windows, keyed off the last reported severity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomsClearanceConfig {
    /// Severity at or below which the short window applies
    pub severity_pivot: f64,
    /// Quiet days required to clear a mild episode
    pub short_window_days: i64,
    /// Quiet days required to clear a stronger episode
    pub long_window_days: i64,
}

impl Default for DomsClearanceConfig {
    fn default() -> Self {
        Self {
            severity_pivot: 2.0,
            short_window_days: 1,
            long_window_days: 2,
        }
    }
}
