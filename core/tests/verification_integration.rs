//! End-to-end flow through the public store API

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};

use og_core::{
    AuditEventType, ManualClock, MemoryAuditSink, RandomSource, UserId, VerificationError,
    VerificationStore, VerifyCodeResult, VerifyOutcome,
};

struct FixedBytes {
    bytes: Vec<u8>,
    position: Mutex<usize>,
}

impl RandomSource for FixedBytes {
    fn fill_bytes(&self, dest: &mut [u8]) {
        let mut position = self.position.lock().unwrap();
        for byte in dest.iter_mut() {
            *byte = self.bytes[*position % self.bytes.len()];
            *position += 1;
        }
    }
}

fn start() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-05-01T09:30:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn store() -> (VerificationStore, Arc<ManualClock>, Arc<MemoryAuditSink>) {
    let clock = Arc::new(ManualClock::new(start()));
    let audit = Arc::new(MemoryAuditSink::new());
    let store = VerificationStore::with_defaults()
        .with_random_source(Arc::new(FixedBytes {
            bytes: vec![1, 2, 3, 4, 5, 6],
            position: Mutex::new(0),
        }))
        .with_clock(clock.clone())
        .with_audit_sink(audit.clone());
    (store, clock, audit)
}

#[test]
fn test_three_misses_lock_the_user_out() {
    let (store, clock, audit) = store();
    let user = UserId(42);

    assert_eq!(store.create_session(user).unwrap(), "123456");

    let first = VerifyCodeResult::from(store.verify(user, "000000"));
    assert!(!first.success);
    assert_eq!(first.remaining_attempts, Some(2));
    assert!(first.message.contains("2 attempt(s) remaining"));

    let second = VerifyCodeResult::from(store.verify(user, "111111"));
    assert_eq!(second.remaining_attempts, Some(1));
    assert!(second.message.contains("1 attempt(s) remaining"));

    let third = VerifyCodeResult::from(store.verify(user, "222222"));
    assert!(!third.success);
    assert_eq!(third.remaining_attempts, None);
    assert!(third.message.contains("locked out for 15 minutes"));

    assert!(store.is_locked_out(user));
    assert_eq!(store.remaining_lockout_minutes(user), 15);
    assert_eq!(
        store.create_session(user),
        Err(VerificationError::LockedOut {
            minutes_remaining: 15
        })
    );

    // Correct code is useless once the session is gone
    assert_eq!(store.verify(user, "123456"), VerifyOutcome::NoActiveSession);

    clock.advance(Duration::minutes(15));
    assert!(!store.is_locked_out(user));

    assert_eq!(
        audit.events_for(user),
        vec![
            AuditEventType::SessionCreated,
            AuditEventType::VerifyFailed,
            AuditEventType::VerifyFailed,
            AuditEventType::VerifyFailed,
        ]
    );
}

#[test]
fn test_successful_verification_flow() {
    let (store, clock, _audit) = store();
    let user = UserId(7);

    let code = store.create_session(user).unwrap();
    clock.advance(Duration::minutes(4));

    assert!(!store.verify(user, "999999").is_success());
    let outcome = store.verify(user, &code);
    assert_eq!(outcome, VerifyOutcome::Verified);
    assert_eq!(outcome.message(), "Verification successful.");

    assert!(store.is_verified(user));
    assert_eq!(store.session_count(), 0);

    store.remove_verification(user);
    assert!(!store.is_verified(user));
}

#[test]
fn test_code_expires_after_five_minutes() {
    let (store, clock, _audit) = store();
    let user = UserId(8);

    let code = store.create_session(user).unwrap();
    clock.advance(Duration::minutes(5) + Duration::seconds(1));

    assert_eq!(store.verify(user, &code), VerifyOutcome::Expired);
    assert_eq!(store.verify(user, &code), VerifyOutcome::NoActiveSession);
    assert!(!store.is_verified(user));
}
