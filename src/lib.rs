// ABOUTME: Main library entry point for the SquatForm core crate
// ABOUTME: Squat joint-angle mechanics, workout session records, and history service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SquatForm Labs

#![deny(unsafe_code)]

//! # SquatForm Core
//!
//! The deterministic, UI-free core of the SquatForm fitness app. The app's
//! camera capture, pose detection, and rendering layers live elsewhere; this
//! crate holds the pieces that are pure computation and plain data:
//!
//! - **Mechanics**: the squat joint-angle geometry model mapping a normalized
//!   squat depth plus body/equipment configuration to ankle, knee, and hip
//!   angles, and the hip strain classifier driving form feedback
//! - **Models**: the immutable workout session record and its aggregates
//! - **History**: an injectable workout history service with pluggable
//!   storage and a snapshot subscription channel for UI state
//!
//! ## Example
//!
//! ```rust
//! use squatform_core::mechanics::{compute_joint_angles, BoardHeight, FemurLength};
//!
//! // Halfway down a squat with short femurs and no heel board
//! let angles = compute_joint_angles(0.5, FemurLength::Short, BoardHeight::None);
//! assert!(angles.knee > 90.0);
//! ```

/// Environment-based configuration management
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// Unified error handling with standard error codes
pub mod errors;

/// Workout history service with pluggable storage and snapshot subscriptions
pub mod history;

/// Production logging and structured output
pub mod logging;

/// Squat joint-angle geometry model and hip strain classification
pub mod mechanics;

/// Core data models for workout sessions
pub mod models;
