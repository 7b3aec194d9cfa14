// ABOUTME: Squat joint-angle geometry model for the biomechanics visualizer
// ABOUTME: Maps squat depth and body/equipment configuration to ankle, knee, and hip angles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SquatForm Labs

//! # Squat Mechanics
//!
//! Pure geometry model for a two-segment leg plus torso performing a squat.
//! Given a normalized squat depth and the user's femur-length and heel-board
//! configuration, [`compute_joint_angles`] interpolates each joint angle
//! independently between a fixed standing pose and a per-configuration bottom
//! pose.
//!
//! Everything in this module is referentially transparent: no state, no I/O,
//! no allocation. Safe to call from any thread and trivially memoizable. The
//! UI layer recomputes on every slider change.

/// Reference poses: the fixed standing pose and the bottom-pose lookup table
pub mod poses;

/// Hip strain classification for form feedback coloring
pub mod strain;

pub use strain::{classify_hip_strain, HipStrain};

use serde::{Deserialize, Serialize};

/// Femur length setting for the stick-figure leg proportions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FemurLength {
    /// Baseline femur length
    Short,
    /// Longer femur, shifting the bottom pose toward more forward lean
    Long,
}

impl FemurLength {
    /// Scale factor applied to the thigh segment length when rendering.
    /// `Long` models a femur 10% longer than baseline.
    #[must_use]
    pub const fn length_multiplier(self) -> f64 {
        match self {
            Self::Short => 1.0,
            Self::Long => 1.1,
        }
    }
}

/// Heel elevation setting simulating a wedge board under the heels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardHeight {
    /// Flat floor, no board
    None,
    /// Low wedge
    Low,
    /// Medium wedge
    Medium,
    /// High wedge
    High,
}

impl BoardHeight {
    /// Incline of the wedge surface in degrees
    #[must_use]
    pub const fn incline_angle(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Low => 15.0,
            Self::Medium => 25.0,
            Self::High => 35.0,
        }
    }

    /// Ankle angle at the top of the rep, in degrees.
    ///
    /// Currently 90 for every incline; the wedge only changes the bottom
    /// pose.
    // TODO: vary the starting ankle angle with the wedge incline once the
    // visualizer renders the inclined foot segment.
    #[must_use]
    pub const fn starting_ankle_angle(self) -> f64 {
        match self {
            Self::None | Self::Low | Self::Medium | Self::High => 90.0,
        }
    }
}

/// Ankle, knee, and hip angles (degrees) describing the simulated body pose
/// at a given squat depth
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointAngles {
    /// Ankle angle in degrees
    pub ankle: f64,
    /// Knee angle in degrees
    pub knee: f64,
    /// Hip angle in degrees
    pub hip: f64,
}

/// Compute the joint angles at a given squat depth.
///
/// `squat_depth` is the normalized progress through the rep: 0 is standing,
/// 1 is the bottom position. Each angle is an independent affine
/// interpolation between the standing pose and the bottom pose for the given
/// `(femur, board)` configuration, so for a fixed configuration the output is
/// continuous and monotonic in `squat_depth`.
///
/// Depth is not clamped here: values outside `[0, 1]` extrapolate along the
/// same line. The input widget owns range enforcement.
#[must_use]
pub fn compute_joint_angles(
    squat_depth: f64,
    femur: FemurLength,
    board: BoardHeight,
) -> JointAngles {
    let start = poses::standing_pose(board);
    let end = poses::bottom_pose(femur, board);

    JointAngles {
        ankle: lerp(start.ankle, end.ankle, squat_depth),
        knee: lerp(start.knee, end.knee, squat_depth),
        hip: lerp(start.hip, end.hip, squat_depth),
    }
}

/// Affine interpolation from `start` to `end`, unclamped in `t`
fn lerp(start: f64, end: f64, t: f64) -> f64 {
    (end - start).mul_add(t, start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standing_pose_at_zero_depth() {
        let angles = compute_joint_angles(0.0, FemurLength::Long, BoardHeight::High);
        assert!((angles.knee - 90.0).abs() < f64::EPSILON);
        assert!((angles.hip - 90.0).abs() < f64::EPSILON);
        assert!((angles.ankle - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bottom_pose_at_full_depth() {
        let angles = compute_joint_angles(1.0, FemurLength::Long, BoardHeight::Medium);
        assert!((angles.hip - 80.0).abs() < f64::EPSILON);
        assert!((angles.knee - 180.0).abs() < f64::EPSILON);
        assert!((angles.ankle - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_midpoint_is_affine() {
        let angles = compute_joint_angles(0.5, FemurLength::Short, BoardHeight::None);
        assert!((angles.ankle - 65.0).abs() < f64::EPSILON);
        assert!((angles.knee - 137.5).abs() < f64::EPSILON);
        assert!((angles.hip - 85.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_femur_length_multiplier() {
        assert!((FemurLength::Short.length_multiplier() - 1.0).abs() < f64::EPSILON);
        assert!((FemurLength::Long.length_multiplier() - 1.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_board_incline_angles() {
        assert!((BoardHeight::None.incline_angle() - 0.0).abs() < f64::EPSILON);
        assert!((BoardHeight::Low.incline_angle() - 15.0).abs() < f64::EPSILON);
        assert!((BoardHeight::Medium.incline_angle() - 25.0).abs() < f64::EPSILON);
        assert!((BoardHeight::High.incline_angle() - 35.0).abs() < f64::EPSILON);
    }
}
