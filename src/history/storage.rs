// ABOUTME: Storage abstraction for workout session persistence
// ABOUTME: Async WorkoutStore trait with an in-memory reference implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SquatForm Labs

//! Pluggable workout session storage.
//!
//! [`WorkoutStore`] is the seam where a persistent backend (device database,
//! cloud document store) plugs in. The in-memory implementation backs tests
//! and offline use; it is also the local cache layer a sync engine would
//! write through.

use crate::errors::{AppError, AppResult};
use crate::models::WorkoutSession;
use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

/// Async storage backend for workout sessions
#[async_trait]
pub trait WorkoutStore: Send + Sync {
    /// Persist a new session.
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if a session with the same id is
    /// already stored, or `StorageError` if the backend fails.
    async fn insert(&self, session: WorkoutSession) -> AppResult<()>;

    /// Fetch a session by id, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    async fn get(&self, id: Uuid) -> AppResult<Option<WorkoutSession>>;

    /// List all stored sessions in unspecified order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    async fn list(&self) -> AppResult<Vec<WorkoutSession>>;

    /// Delete a session by id; `true` if something was removed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Delete every stored session, returning the number removed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    async fn clear(&self) -> AppResult<usize>;
}

/// In-memory session store backed by a concurrent map
#[derive(Debug, Default)]
pub struct InMemoryWorkoutStore {
    sessions: DashMap<Uuid, WorkoutSession>,
}

impl InMemoryWorkoutStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkoutStore for InMemoryWorkoutStore {
    async fn insert(&self, session: WorkoutSession) -> AppResult<()> {
        if self.sessions.contains_key(&session.id) {
            return Err(AppError::already_exists(format!(
                "workout session {}",
                session.id
            )));
        }
        self.sessions.insert(session.id, session);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<WorkoutSession>> {
        Ok(self.sessions.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list(&self) -> AppResult<Vec<WorkoutSession>> {
        Ok(self
            .sessions
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.sessions.remove(&id).is_some())
    }

    async fn clear(&self) -> AppResult<usize> {
        let removed = self.sessions.len();
        self.sessions.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[tokio::test]
    async fn test_insert_rejects_duplicate_ids() {
        let store = InMemoryWorkoutStore::new();
        let session = WorkoutSession::new(600, 20, 100.0);

        store.insert(session.clone()).await.unwrap();
        let error = store.insert(session).await.unwrap_err();
        assert_eq!(
            error.code,
            crate::errors::ErrorCode::ResourceAlreadyExists
        );
    }

    #[tokio::test]
    async fn test_delete_reports_presence() {
        let store = InMemoryWorkoutStore::new();
        let session = WorkoutSession::new(600, 20, 100.0);
        let id = session.id;

        store.insert(session).await.unwrap();
        assert!(store.delete(id).await.unwrap());
        assert!(!store.delete(id).await.unwrap());
        assert!(store.get(id).await.unwrap().is_none());
    }
}
