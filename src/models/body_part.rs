// ABOUTME: Surveyed body part locations and laterality
// ABOUTME: BodyPartLocation with muscle/joint partition, Side enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tonus Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Body part locations offered by the daily surveys
///
/// The muscle/joint partition drives downstream routing: only muscle
/// locations participate in the DOMS lifecycle, while joints feed the
/// pain ladder exclusively.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BodyPartLocation {
    /// Head
    Head,
    /// Shoulder muscle group
    Shoulder,
    /// Chest
    Chest,
    /// Abdominals
    Abdominals,
    /// Hip joint
    Hip,
    /// Groin
    Groin,
    /// Quadriceps
    Quads,
    /// Knee joint
    Knee,
    /// Shin
    Shin,
    /// Ankle joint
    Ankle,
    /// Foot
    Foot,
    /// Outer thigh / IT band
    OuterThigh,
    /// Lower back
    LowerBack,
    /// Non-specific / whole body
    General,
    /// Glutes
    Glutes,
    /// Hamstrings
    Hamstrings,
    /// Calves
    Calves,
    /// Achilles
    Achilles,
    /// Upper back and neck
    UpperBackNeck,
    /// Elbow joint
    Elbow,
    /// Wrist joint
    Wrist,
    /// Lats muscle group
    Lats,
}

impl BodyPartLocation {
    /// Whether this location is a muscle group (eligible for DOMS tracking)
    #[must_use]
    pub const fn is_muscle(self) -> bool {
        matches!(
            self,
            Self::Shoulder
                | Self::Chest
                | Self::Abdominals
                | Self::Groin
                | Self::Quads
                | Self::Shin
                | Self::OuterThigh
                | Self::LowerBack
                | Self::Glutes
                | Self::Hamstrings
                | Self::Calves
                | Self::UpperBackNeck
                | Self::Lats
        )
    }

    /// Whether this location is a joint
    #[must_use]
    pub const fn is_joint(self) -> bool {
        matches!(
            self,
            Self::Hip
                | Self::Knee
                | Self::Ankle
                | Self::Foot
                | Self::Achilles
                | Self::Elbow
                | Self::Wrist
        )
    }
}

/// Laterality of a reported body part
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Bilateral or not applicable
    None,
    /// Left side
    Left,
    /// Right side
    Right,
}
