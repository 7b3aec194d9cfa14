// ABOUTME: Core data models for the SquatForm fitness app
// ABOUTME: Defines WorkoutSession and aggregate history totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SquatForm Labs

//! # Data Models
//!
//! Core data structures shared between the workout timer, the history
//! service, and the UI layer.
//!
//! ## Design Principles
//!
//! - **Immutable**: a session describes a completed workout and never changes
//! - **Serializable**: all models support JSON serialization for persistence
//! - **Type Safe**: non-negative counts are enforced by unsigned types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One completed workout, created by the rep counter at workout-stop time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    /// Unique session identifier
    pub id: Uuid,
    /// When the workout finished (UTC)
    pub completed_at: DateTime<Utc>,
    /// Total workout duration in seconds
    pub duration_seconds: u64,
    /// Number of completed repetitions
    pub rep_count: u32,
    /// Estimated calories burned during the workout
    pub calories_burned: f64,
}

impl WorkoutSession {
    /// Create a session record stamped with a fresh id and the current time
    #[must_use]
    pub fn new(duration_seconds: u64, rep_count: u32, calories_burned: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            completed_at: Utc::now(),
            duration_seconds,
            rep_count,
            calories_burned,
        }
    }

    /// Duration rendered as "mm:ss" for history rows
    #[must_use]
    pub fn duration_formatted(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.duration_seconds / 60,
            self.duration_seconds % 60
        )
    }

    /// Completion date rendered for history rows, e.g. "Aug 7, 2026 14:03"
    #[must_use]
    pub fn completed_at_formatted(&self) -> String {
        self.completed_at.format("%b %-d, %Y %H:%M").to_string()
    }
}

/// Aggregate totals over a set of sessions, shown at the top of the history
/// screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryTotals {
    /// Number of sessions aggregated
    pub session_count: usize,
    /// Sum of repetitions across sessions
    pub total_reps: u64,
    /// Sum of workout durations in seconds
    pub total_duration_seconds: u64,
    /// Sum of estimated calories burned
    pub total_calories_burned: f64,
}

impl HistoryTotals {
    /// Aggregate totals over the given sessions
    #[must_use]
    pub fn from_sessions(sessions: &[WorkoutSession]) -> Self {
        Self {
            session_count: sessions.len(),
            total_reps: sessions.iter().map(|s| u64::from(s.rep_count)).sum(),
            total_duration_seconds: sessions.iter().map(|s| s.duration_seconds).sum(),
            total_calories_burned: sessions.iter().map(|s| s.calories_burned).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_duration_formatting() {
        let session = WorkoutSession::new(754, 42, 180.5);
        assert_eq!(session.duration_formatted(), "12:34");

        let short = WorkoutSession::new(59, 8, 20.0);
        assert_eq!(short.duration_formatted(), "00:59");
    }

    #[test]
    fn test_session_round_trips_through_json() {
        let session = WorkoutSession::new(600, 30, 150.0);
        let json = serde_json::to_string(&session).unwrap();
        let restored: WorkoutSession = serde_json::from_str(&json).unwrap();
        assert_eq!(session, restored);
    }

    #[test]
    fn test_totals_aggregation() {
        let sessions = vec![
            WorkoutSession::new(600, 30, 150.0),
            WorkoutSession::new(300, 12, 60.0),
        ];
        let totals = HistoryTotals::from_sessions(&sessions);
        assert_eq!(totals.session_count, 2);
        assert_eq!(totals.total_reps, 42);
        assert_eq!(totals.total_duration_seconds, 900);
        assert!((totals.total_calories_burned - 210.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_totals_of_empty_history() {
        assert_eq!(HistoryTotals::from_sessions(&[]), HistoryTotals::default());
    }
}
