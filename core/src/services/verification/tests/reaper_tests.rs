//! Tests for the background reaper

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::Duration;

use crate::domain::value_objects::UserId;
use crate::services::verification::{SessionReaper, VerificationStore};

use super::mocks::harness;

fn lock_out(store: &VerificationStore, user: UserId) {
    store.create_session(user).unwrap();
    for _ in 0..3 {
        store.verify(user, "000000");
    }
}

#[test]
fn test_sweep_removes_only_expired_entries() {
    let h = harness();
    for id in 1..=3 {
        h.store.create_session(UserId(id)).unwrap();
    }
    lock_out(&h.store, UserId(10));
    lock_out(&h.store, UserId(11));

    h.clock.advance(Duration::minutes(16));
    h.store.create_session(UserId(4)).unwrap();
    lock_out(&h.store, UserId(12));

    let result = h.store.sweep();

    assert_eq!(result.expired_sessions, 3);
    assert_eq!(result.expired_lockouts, 2);
    assert_eq!(result.total(), 5);
    assert_eq!(h.store.session_count(), 1);
    assert!(h.store.active_session(UserId(4)).is_some());
    assert_eq!(h.store.lockout_count(), 1);
    assert!(h.store.is_locked_out(UserId(12)));
}

#[test]
fn test_sweep_on_empty_store_is_silent_noop() {
    let h = harness();
    let result = h.store.sweep();
    assert_eq!(result.total(), 0);
}

#[test]
fn test_sweep_keeps_verified_set() {
    let h = harness();
    let code = h.store.create_session(UserId(1)).unwrap();
    h.store.verify(UserId(1), &code);
    h.clock.advance(Duration::days(30));

    h.store.sweep();

    assert!(h.store.is_verified(UserId(1)));
}

#[test]
fn test_interval_defaults_and_clamping() {
    let store = Arc::new(VerificationStore::with_defaults());

    assert_eq!(
        SessionReaper::with_defaults(store.clone()).interval(),
        StdDuration::from_secs(300)
    );
    assert_eq!(
        SessionReaper::new(store.clone(), StdDuration::ZERO).interval(),
        StdDuration::from_secs(1)
    );
    assert_eq!(
        SessionReaper::new(store.clone(), StdDuration::from_millis(999)).interval(),
        StdDuration::from_secs(1)
    );
    assert_eq!(
        SessionReaper::new(store, StdDuration::from_millis(1500)).interval(),
        StdDuration::from_millis(1500)
    );
}

#[tokio::test(start_paused = true)]
async fn test_reaper_sweeps_each_interval() {
    let h = harness();
    let clock = h.clock.clone();
    let store = Arc::new(h.store);
    store.create_session(UserId(1)).unwrap();
    clock.advance(Duration::minutes(6));

    let handle = SessionReaper::new(store.clone(), StdDuration::from_secs(300)).start();

    tokio::time::sleep(StdDuration::from_secs(299)).await;
    assert_eq!(store.session_count(), 1, "no sweep before the first interval");
    assert!(!handle.is_finished());

    tokio::time::sleep(StdDuration::from_secs(2)).await;
    assert_eq!(store.session_count(), 0);

    // Next interval picks up entries that expire later
    store.create_session(UserId(2)).unwrap();
    clock.advance(Duration::minutes(6));
    tokio::time::sleep(StdDuration::from_secs(300)).await;
    assert_eq!(store.session_count(), 0);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_stops_sweeping() {
    let h = harness();
    let clock = h.clock.clone();
    let store = Arc::new(h.store);

    let handle = SessionReaper::new(store.clone(), StdDuration::from_secs(60)).start();
    handle.shutdown().await;

    store.create_session(UserId(1)).unwrap();
    clock.advance(Duration::minutes(6));
    tokio::time::sleep(StdDuration::from_secs(600)).await;

    assert_eq!(store.session_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_handle_stops_sweeping() {
    let h = harness();
    let clock = h.clock.clone();
    let store = Arc::new(h.store);

    let handle = SessionReaper::new(store.clone(), StdDuration::from_secs(60)).start();
    drop(handle);

    store.create_session(UserId(1)).unwrap();
    clock.advance(Duration::minutes(6));
    tokio::time::sleep(StdDuration::from_secs(600)).await;

    assert_eq!(store.session_count(), 1);
}
