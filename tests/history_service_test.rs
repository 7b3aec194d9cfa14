// ABOUTME: Integration tests for the workout history service
// ABOUTME: Covers record/list/delete/clear flows, validation, snapshots, and subscriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SquatForm Labs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, Utc};
use squatform_core::config::HistoryConfig;
use squatform_core::errors::ErrorCode;
use squatform_core::history::{InMemoryWorkoutStore, WorkoutHistoryService, WorkoutStore};
use squatform_core::models::WorkoutSession;
use std::sync::Arc;
use uuid::Uuid;

fn service() -> WorkoutHistoryService {
    WorkoutHistoryService::new(
        Arc::new(InMemoryWorkoutStore::new()),
        HistoryConfig::default(),
    )
}

/// A session completed `minutes_ago` minutes before now
fn session_completed(minutes_ago: i64, rep_count: u32) -> WorkoutSession {
    WorkoutSession {
        id: Uuid::new_v4(),
        completed_at: Utc::now() - Duration::minutes(minutes_ago),
        duration_seconds: 600,
        rep_count,
        calories_burned: f64::from(rep_count) * 5.0,
    }
}

#[tokio::test]
async fn test_record_and_list_newest_first() {
    let service = service();

    let oldest = session_completed(30, 10);
    let middle = session_completed(20, 20);
    let newest = session_completed(10, 30);

    // Insert out of order
    service.record_session(middle.clone()).await.unwrap();
    service.record_session(newest.clone()).await.unwrap();
    service.record_session(oldest.clone()).await.unwrap();

    let sessions = service.sessions().await.unwrap();
    assert_eq!(sessions.len(), 3);
    assert_eq!(sessions[0].id, newest.id);
    assert_eq!(sessions[1].id, middle.id);
    assert_eq!(sessions[2].id, oldest.id);
}

#[tokio::test]
async fn test_record_rejects_negative_calories() {
    let service = service();
    let mut session = session_completed(5, 10);
    session.calories_burned = -1.0;

    let error = service.record_session(session).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);

    let mut session = session_completed(5, 10);
    session.calories_burned = f64::NAN;
    let error = service.record_session(session).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_delete_session_and_not_found() {
    let service = service();
    let session = session_completed(5, 10);
    let id = session.id;

    service.record_session(session).await.unwrap();
    service.delete_session(id).await.unwrap();

    let error = service.delete_session(id).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert!(service.sessions().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_clear_reports_removed_count() {
    let service = service();
    for minutes in 1..=4 {
        service
            .record_session(session_completed(minutes, 10))
            .await
            .unwrap();
    }

    assert_eq!(service.clear().await.unwrap(), 4);
    assert_eq!(service.clear().await.unwrap(), 0);
}

#[tokio::test]
async fn test_snapshot_tracks_mutations() {
    let service = service();
    assert!(service.snapshot().sessions.is_empty());

    let session = session_completed(5, 12);
    let id = session.id;
    service.record_session(session).await.unwrap();

    let snapshot = service.snapshot();
    assert_eq!(snapshot.sessions.len(), 1);
    assert_eq!(snapshot.totals.total_reps, 12);

    service.delete_session(id).await.unwrap();
    assert!(service.snapshot().sessions.is_empty());
    assert_eq!(service.snapshot().totals.session_count, 0);
}

#[tokio::test]
async fn test_subscribers_see_updates() {
    let service = service();
    let mut receiver = service.subscribe();

    // Initial snapshot is the empty history
    assert!(receiver.borrow().sessions.is_empty());

    service
        .record_session(session_completed(5, 15))
        .await
        .unwrap();

    receiver.changed().await.unwrap();
    let snapshot = receiver.borrow_and_update();
    assert_eq!(snapshot.sessions.len(), 1);
    assert_eq!(snapshot.totals.total_reps, 15);
}

#[tokio::test]
async fn test_snapshot_is_bounded_but_totals_are_not() {
    let service = WorkoutHistoryService::new(
        Arc::new(InMemoryWorkoutStore::new()),
        HistoryConfig {
            max_cached_sessions: 2,
        },
    );

    for minutes in 1..=5 {
        service
            .record_session(session_completed(minutes, 10))
            .await
            .unwrap();
    }

    let snapshot = service.snapshot();
    assert_eq!(snapshot.sessions.len(), 2);
    assert_eq!(snapshot.totals.session_count, 5);
    assert_eq!(snapshot.totals.total_reps, 50);

    // The bounded view keeps the newest sessions
    assert_eq!(snapshot.sessions[0].completed_at.timestamp(), {
        let all = service.sessions().await.unwrap();
        all[0].completed_at.timestamp()
    });
}

#[tokio::test]
async fn test_refresh_picks_up_preexisting_store_contents() {
    let store = Arc::new(InMemoryWorkoutStore::new());
    let seeded = session_completed(60, 25);
    store.insert(seeded).await.unwrap();

    let service = WorkoutHistoryService::new(store, HistoryConfig::default());
    assert!(service.snapshot().sessions.is_empty());

    service.refresh().await.unwrap();
    assert_eq!(service.snapshot().sessions.len(), 1);
    assert_eq!(service.snapshot().totals.total_reps, 25);
}
