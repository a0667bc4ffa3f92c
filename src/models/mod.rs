// ABOUTME: Data models for the body-status ledger
// ABOUTME: Body parts, raw reports, and historic ledger records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tonus Fitness Intelligence

//! Common data structures shared across the ledger components.

/// Body part locations and laterality
pub mod body_part;
/// Historic ledger records and status machine
pub mod historic;
/// Raw survey reports
pub mod report;

pub use body_part::{BodyPartLocation, Side};
pub use historic::{ClearedSoreness, HistoricSoreness, HistoricSorenessStatus, SeveritySample};
pub use report::{SorenessKey, SorenessReport};
