// ABOUTME: Reference poses for the squat stick-figure model
// ABOUTME: Fixed standing pose and the per-configuration bottom-pose lookup table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SquatForm Labs

//! Reference poses bounding the squat interpolation.
//!
//! The standing pose is shared by every configuration; the bottom pose comes
//! from a total lookup table over all eight `(FemurLength, BoardHeight)`
//! combinations. The angle convention treats 180 degrees as the straight-leg
//! baseline and raises the knee angle further through flexion, so knee bottom
//! values above 180 are intentional.

use super::{BoardHeight, FemurLength, JointAngles};

/// Standing (top-of-rep) pose angles shared by every configuration
pub mod standing {
    /// Knee angle at the top of the rep, in degrees (vertical shin/thigh)
    pub const KNEE_ANGLE: f64 = 90.0;

    /// Hip angle at the top of the rep, in degrees (upright torso)
    pub const HIP_ANGLE: f64 = 90.0;
}

/// The standing pose for the given board height.
///
/// Knee and hip are fixed; the ankle start comes from
/// [`BoardHeight::starting_ankle_angle`].
#[must_use]
pub const fn standing_pose(board: BoardHeight) -> JointAngles {
    JointAngles {
        ankle: board.starting_ankle_angle(),
        knee: standing::KNEE_ANGLE,
        hip: standing::HIP_ANGLE,
    }
}

/// Bottom-of-rep pose for the given configuration.
///
/// Total over all eight combinations; every arm is a literal calibrated
/// against the visualizer's stick figure. Higher boards keep the torso more
/// upright (higher hip angle) and reduce the ankle angle demand.
#[must_use]
pub const fn bottom_pose(femur: FemurLength, board: BoardHeight) -> JointAngles {
    match (femur, board) {
        (FemurLength::Short, BoardHeight::None) => JointAngles {
            ankle: 40.0,
            knee: 185.0,
            hip: 80.0,
        },
        (FemurLength::Short, BoardHeight::Low) => JointAngles {
            ankle: 36.0,
            knee: 188.0,
            hip: 83.0,
        },
        (FemurLength::Short, BoardHeight::Medium) => JointAngles {
            ankle: 33.0,
            knee: 190.0,
            hip: 86.0,
        },
        (FemurLength::Short, BoardHeight::High) => JointAngles {
            ankle: 30.0,
            knee: 192.0,
            hip: 88.0,
        },
        (FemurLength::Long, BoardHeight::None) => JointAngles {
            ankle: 50.0,
            knee: 175.0,
            hip: 65.0,
        },
        (FemurLength::Long, BoardHeight::Low) => JointAngles {
            ankle: 40.0,
            knee: 178.0,
            hip: 75.0,
        },
        (FemurLength::Long, BoardHeight::Medium) => JointAngles {
            ankle: 30.0,
            knee: 180.0,
            hip: 80.0,
        },
        (FemurLength::Long, BoardHeight::High) => JointAngles {
            ankle: 20.0,
            knee: 183.0,
            hip: 85.0,
        },
    }
}
