// ABOUTME: Hip strain classification from the simulated hip angle
// ABOUTME: Three-level severity bucket driving the visualizer's form feedback color
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SquatForm Labs

//! Hip strain classification.
//!
//! Buckets a hip angle into a coarse severity used to warn about excessive
//! forward lean. Lower hip angles mean a more folded-over torso and more
//! lumbar load.

use serde::{Deserialize, Serialize};

/// Discrete hip strain severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HipStrain {
    /// Upright torso, hip angle in the 80-90 degree band
    Safe,
    /// Noticeable forward lean, hip angle in the 70-80 degree band
    Moderate,
    /// Excessive forward lean (or an out-of-model angle)
    High,
}

impl HipStrain {
    /// Feedback color shown by the visualizer for this severity
    #[must_use]
    pub const fn display_color(self) -> &'static str {
        match self {
            Self::Safe => "green",
            Self::Moderate => "orange",
            Self::High => "red",
        }
    }
}

/// Classify a hip angle (degrees) into a strain severity.
///
/// First matching band wins: `[80, 90]` is safe, `[70, 80)` is moderate,
/// everything else is high. Angles above 90 cannot come out of the bottom
/// pose table (its maximum hip is 88) but still classify as high rather
/// than panicking; the function is total over the real line.
#[must_use]
pub fn classify_hip_strain(hip_angle_degrees: f64) -> HipStrain {
    if (80.0..=90.0).contains(&hip_angle_degrees) {
        HipStrain::Safe
    } else if (70.0..80.0).contains(&hip_angle_degrees) {
        HipStrain::Moderate
    } else {
        HipStrain::High
    }
}
