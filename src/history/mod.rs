// ABOUTME: Workout history service with explicit state publication
// ABOUTME: Records, lists, and deletes sessions through an injected store and a watch channel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SquatForm Labs

//! # Workout History
//!
//! [`WorkoutHistoryService`] owns the history state the UI renders. The
//! storage backend is constructor-injected rather than reached through a
//! process-wide singleton, and observers get state through an explicit
//! subscription channel instead of implicit global notification: every
//! mutation republishes a [`HistorySnapshot`] on a `tokio::sync::watch`
//! channel, and any number of subscribers receive the latest snapshot.

/// Pluggable workout session storage
pub mod storage;

pub use storage::{InMemoryWorkoutStore, WorkoutStore};

use crate::config::HistoryConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{HistoryTotals, WorkoutSession};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info};
use uuid::Uuid;

/// Point-in-time view of the workout history, newest session first.
///
/// Bounded by [`HistoryConfig::max_cached_sessions`]; the totals always
/// cover every stored session, even those past the snapshot bound.
#[derive(Debug, Clone, Default)]
pub struct HistorySnapshot {
    /// Sessions ordered newest first, truncated to the configured bound
    pub sessions: Vec<WorkoutSession>,
    /// Aggregate totals over all stored sessions
    pub totals: HistoryTotals,
}

/// Workout history service with an injected storage backend
pub struct WorkoutHistoryService {
    store: Arc<dyn WorkoutStore>,
    config: HistoryConfig,
    snapshot_tx: watch::Sender<HistorySnapshot>,
}

impl WorkoutHistoryService {
    /// Create a service over the given store.
    ///
    /// The initial published snapshot is empty; call [`Self::refresh`] after
    /// construction when the store already holds sessions.
    #[must_use]
    pub fn new(store: Arc<dyn WorkoutStore>, config: HistoryConfig) -> Self {
        let (snapshot_tx, _) = watch::channel(HistorySnapshot::default());
        Self {
            store,
            config,
            snapshot_tx,
        }
    }

    /// Subscribe to history snapshots. The receiver immediately holds the
    /// current snapshot and is notified on every subsequent change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<HistorySnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// The currently published snapshot
    #[must_use]
    pub fn snapshot(&self) -> HistorySnapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// Validate and persist a completed session, then republish.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the session's calorie estimate is negative
    /// or not finite, `ResourceAlreadyExists` on id collision, or a storage
    /// error from the backend.
    pub async fn record_session(&self, session: WorkoutSession) -> AppResult<()> {
        if !session.calories_burned.is_finite() || session.calories_burned < 0.0 {
            return Err(AppError::invalid_input(format!(
                "calories_burned must be a non-negative finite number, got {}",
                session.calories_burned
            )));
        }

        let id = session.id;
        let rep_count = session.rep_count;
        self.store.insert(session).await?;
        info!(session_id = %id, rep_count, "recorded workout session");

        self.refresh().await
    }

    /// List stored sessions, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error from the backend.
    pub async fn sessions(&self) -> AppResult<Vec<WorkoutSession>> {
        let mut sessions = self.store.list().await?;
        sessions.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Ok(sessions)
    }

    /// Delete one session by id, then republish.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no session has the given id, or a
    /// storage error from the backend.
    pub async fn delete_session(&self, id: Uuid) -> AppResult<()> {
        let removed = self.store.delete(id).await?;
        if !removed {
            return Err(AppError::not_found(format!("workout session {id}")));
        }
        info!(session_id = %id, "deleted workout session");

        self.refresh().await
    }

    /// Delete every stored session, then republish. Returns the number
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns a storage error from the backend.
    pub async fn clear(&self) -> AppResult<usize> {
        let removed = self.store.clear().await?;
        info!(removed, "cleared workout history");

        self.refresh().await?;
        Ok(removed)
    }

    /// Rebuild the published snapshot from the store.
    ///
    /// # Errors
    ///
    /// Returns a storage error from the backend.
    pub async fn refresh(&self) -> AppResult<()> {
        let sessions = self.sessions().await?;
        let totals = HistoryTotals::from_sessions(&sessions);

        let mut bounded = sessions;
        if bounded.len() > self.config.max_cached_sessions {
            debug!(
                stored = bounded.len(),
                cached = self.config.max_cached_sessions,
                "truncating history snapshot to cache bound"
            );
            bounded.truncate(self.config.max_cached_sessions);
        }

        self.snapshot_tx.send_replace(HistorySnapshot {
            sessions: bounded,
            totals,
        });
        Ok(())
    }
}
