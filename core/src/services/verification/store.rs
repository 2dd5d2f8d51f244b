//! In-memory verification store
//!
//! Holds three structures keyed by user: outstanding sessions, the verified set
//! and lockout records. All of them sit behind one mutex; every operation reads
//! the clock once and completes its read-modify-write inside a single critical
//! section. Audit entries are emitted after the lock is released.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use constant_time_eq::constant_time_eq;

use crate::domain::entities::{
    AuditEntry, AuditEventType, LockoutRecord, VerificationSession,
};
use crate::domain::value_objects::{UserId, VerifyOutcome};
use crate::errors::{VerificationError, VerificationResult};
use crate::services::audit::{AuditSink, TracingAuditSink};

use super::clock::SystemClock;
use super::code_generator::{generate_code, OsRandomSource};
use super::config::VerificationStoreConfig;
use super::traits::{Clock, RandomSource};
use super::types::{StoreStats, SweepResult};

#[derive(Debug, Default)]
struct StoreState {
    sessions: HashMap<UserId, VerificationSession>,
    verified: HashSet<UserId>,
    lockouts: HashMap<UserId, LockoutRecord>,
}

impl StoreState {
    /// Minutes left on an active lockout; an elapsed record is deleted on the way
    fn active_lockout_minutes(&mut self, user_id: UserId, now: DateTime<Utc>) -> Option<i64> {
        let record = self.lockouts.get(&user_id)?;
        if !record.is_expired_at(now) {
            return Some(record.remaining_minutes(now));
        }
        self.lockouts.remove(&user_id);
        None
    }
}

/// Verification store owning all OTP state for the process
pub struct VerificationStore {
    state: Mutex<StoreState>,
    config: VerificationStoreConfig,
    random: Arc<dyn RandomSource>,
    clock: Arc<dyn Clock>,
    audit: Arc<dyn AuditSink>,
}

impl VerificationStore {
    /// Create a store backed by the OS CSPRNG, the system clock and the tracing audit sink
    pub fn new(config: VerificationStoreConfig) -> Self {
        Self {
            state: Mutex::new(StoreState::default()),
            config,
            random: Arc::new(OsRandomSource),
            clock: Arc::new(SystemClock),
            audit: Arc::new(TracingAuditSink),
        }
    }

    /// Create a store with the default policy
    pub fn with_defaults() -> Self {
        Self::new(VerificationStoreConfig::default())
    }

    /// Replace the randomness source
    pub fn with_random_source(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    /// Replace the clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the audit sink
    pub fn with_audit_sink(mut self, audit: Arc<dyn AuditSink>) -> Self {
        self.audit = audit;
        self
    }

    /// Active policy
    pub fn config(&self) -> &VerificationStoreConfig {
        &self.config
    }

    // Critical sections never leave the maps half-updated, so a poisoned lock still guards valid state.
    fn lock_state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, entry: AuditEntry) {
        self.audit.record(&entry);
    }

    /// Draw a fresh code of the configured length
    pub fn generate_code(&self) -> String {
        generate_code(self.random.as_ref(), self.config.code_length)
    }

    /// Issue a new code for `user_id`, replacing any outstanding one
    ///
    /// # Returns
    /// * `Ok(code)` - The plaintext code; the caller delivers it to the user
    /// * `Err(VerificationError::LockedOut)` - The user is locked out; no session was created
    pub fn create_session(&self, user_id: UserId) -> VerificationResult<String> {
        let now = self.clock.now();

        let (code, session_id, replaced) = {
            let mut guard = self.lock_state();
            let state = &mut *guard;

            if let Some(minutes_remaining) = state.active_lockout_minutes(user_id, now) {
                tracing::warn!(
                    user_id = %user_id,
                    minutes_remaining = minutes_remaining,
                    event = "otp_request_locked_out",
                    "Rejected code request for locked out user"
                );
                return Err(VerificationError::LockedOut { minutes_remaining });
            }

            let code = self.generate_code();
            let session = VerificationSession::new(
                user_id,
                code.clone(),
                now,
                self.config.code_expiration_minutes,
            );
            let session_id = session.session_id;
            let replaced = state.sessions.insert(user_id, session).is_some();
            (code, session_id, replaced)
        };

        tracing::info!(
            user_id = %user_id,
            session_id = %session_id,
            replaced_previous = replaced,
            event = "otp_generated",
            "Generated new verification code"
        );
        self.emit(AuditEntry::new(
            now,
            user_id,
            AuditEventType::SessionCreated,
            format!(
                "code issued, expires in {} minutes",
                self.config.code_expiration_minutes
            ),
        ));

        Ok(code)
    }

    /// Check `input_code` against the user's outstanding session
    ///
    /// Transitions, in priority order:
    /// 1. No session: nothing changes
    /// 2. Session expired: it is discarded without counting an attempt
    /// 3. Otherwise the attempt is counted, then a match verifies the user and
    ///    clears any lockout; a miss on the last allowed attempt deletes the
    ///    session and locks the user out
    pub fn verify(&self, user_id: UserId, input_code: &str) -> VerifyOutcome {
        let now = self.clock.now();
        let max_attempts = self.config.max_attempts;

        let (outcome, entry) = {
            let mut guard = self.lock_state();
            let state = &mut *guard;

            let Some(session) = state.sessions.get_mut(&user_id) else {
                tracing::debug!(
                    user_id = %user_id,
                    event = "otp_verify_no_session",
                    "Verification attempted without an active session"
                );
                return VerifyOutcome::NoActiveSession;
            };

            if session.is_expired_at(now) {
                let session_id = session.session_id;
                state.sessions.remove(&user_id);
                tracing::info!(
                    user_id = %user_id,
                    session_id = %session_id,
                    event = "otp_expired",
                    "Verification code expired before use"
                );
                (
                    VerifyOutcome::Expired,
                    AuditEntry::new(now, user_id, AuditEventType::VerifyFailed, "code expired"),
                )
            } else {
                session.attempts += 1;
                let attempts = session.attempts;
                let session_id = session.session_id;

                if constant_time_eq(session.code.as_bytes(), input_code.as_bytes()) {
                    session.verified = true;
                    state.sessions.remove(&user_id);
                    state.verified.insert(user_id);
                    state.lockouts.remove(&user_id);

                    tracing::info!(
                        user_id = %user_id,
                        session_id = %session_id,
                        attempts = attempts,
                        event = "otp_verified",
                        "Verification code accepted"
                    );
                    (
                        VerifyOutcome::Verified,
                        AuditEntry::new(
                            now,
                            user_id,
                            AuditEventType::VerifySuccess,
                            format!("verified on attempt {}", attempts),
                        ),
                    )
                } else if attempts >= max_attempts {
                    state.sessions.remove(&user_id);
                    state.lockouts.insert(
                        user_id,
                        LockoutRecord::new(user_id, now, self.config.lockout_minutes),
                    );

                    tracing::warn!(
                        user_id = %user_id,
                        session_id = %session_id,
                        attempts = attempts,
                        lockout_minutes = self.config.lockout_minutes,
                        event = "account_locked",
                        "Maximum verification attempts reached, user locked out"
                    );
                    (
                        VerifyOutcome::LockedOut {
                            lockout_minutes: self.config.lockout_minutes,
                        },
                        AuditEntry::new(
                            now,
                            user_id,
                            AuditEventType::VerifyFailed,
                            format!(
                                "max attempts reached, locked out for {} minutes",
                                self.config.lockout_minutes
                            ),
                        ),
                    )
                } else {
                    let remaining_attempts = session.remaining_attempts(max_attempts);

                    tracing::warn!(
                        user_id = %user_id,
                        session_id = %session_id,
                        attempts = attempts,
                        remaining_attempts = remaining_attempts,
                        event = "otp_mismatch",
                        "Verification code mismatch"
                    );
                    (
                        VerifyOutcome::InvalidCode { remaining_attempts },
                        AuditEntry::new(
                            now,
                            user_id,
                            AuditEventType::VerifyFailed,
                            format!("code mismatch, {} attempt(s) remaining", remaining_attempts),
                        ),
                    )
                }
            }
        };

        self.emit(entry);
        outcome
    }

    /// Whether the user has completed a verification at least once
    pub fn is_verified(&self, user_id: UserId) -> bool {
        self.lock_state().verified.contains(&user_id)
    }

    /// Whether the user is currently locked out; deletes an elapsed lockout record
    pub fn is_locked_out(&self, user_id: UserId) -> bool {
        self.active_lockout_minutes(user_id).is_some()
    }

    /// Minutes left on an active lockout, `None` when the user is not locked out
    ///
    /// Answers both lockout questions under one lock acquisition, so the two can
    /// never disagree. Deletes an elapsed record like [`is_locked_out`](Self::is_locked_out).
    pub fn active_lockout_minutes(&self, user_id: UserId) -> Option<i64> {
        let now = self.clock.now();
        self.lock_state().active_lockout_minutes(user_id, now)
    }

    /// Minutes until the user's lockout ends, rounded up; 0 without a record
    ///
    /// Read-only: an elapsed record is left for [`is_locked_out`](Self::is_locked_out)
    /// or the reaper to delete, and reports 0 meanwhile.
    pub fn remaining_lockout_minutes(&self, user_id: UserId) -> i64 {
        let now = self.clock.now();
        self.lock_state()
            .lockouts
            .get(&user_id)
            .map_or(0, |record| record.remaining_minutes(now))
    }

    /// Delete every trace of the user: verified flag, session and lockout
    ///
    /// Idempotent; always audited.
    pub fn remove_verification(&self, user_id: UserId) {
        let now = self.clock.now();

        let (was_verified, had_session, had_lockout) = {
            let mut guard = self.lock_state();
            let state = &mut *guard;
            (
                state.verified.remove(&user_id),
                state.sessions.remove(&user_id).is_some(),
                state.lockouts.remove(&user_id).is_some(),
            )
        };

        tracing::info!(
            user_id = %user_id,
            was_verified = was_verified,
            had_session = had_session,
            had_lockout = had_lockout,
            event = "verification_removed",
            "Verification state removed"
        );
        self.emit(AuditEntry::new(
            now,
            user_id,
            AuditEventType::VerificationRemoved,
            format!(
                "verified={} session={} lockout={}",
                was_verified, had_session, had_lockout
            ),
        ));
    }

    /// Snapshot of the user's outstanding session, if any
    pub fn active_session(&self, user_id: UserId) -> Option<VerificationSession> {
        self.lock_state().sessions.get(&user_id).cloned()
    }

    /// Delete every expired session and every elapsed lockout
    pub fn sweep(&self) -> SweepResult {
        let now = self.clock.now();

        let result = {
            let mut guard = self.lock_state();
            let state = &mut *guard;

            let sessions_before = state.sessions.len();
            state.sessions.retain(|_, session| !session.is_expired_at(now));
            let lockouts_before = state.lockouts.len();
            state.lockouts.retain(|_, record| !record.is_expired_at(now));

            SweepResult {
                expired_sessions: sessions_before - state.sessions.len(),
                expired_lockouts: lockouts_before - state.lockouts.len(),
            }
        };

        if result.total() > 0 {
            tracing::info!(
                expired_sessions = result.expired_sessions,
                expired_lockouts = result.expired_lockouts,
                "Reaper removed {} expired entries",
                result.total()
            );
        }

        result
    }

    /// Current sizes of the three structures
    pub fn stats(&self) -> StoreStats {
        let state = self.lock_state();
        StoreStats {
            active_sessions: state.sessions.len(),
            locked_out_users: state.lockouts.len(),
            verified_users: state.verified.len(),
        }
    }

    /// Number of sessions held, expired or not
    pub fn session_count(&self) -> usize {
        self.lock_state().sessions.len()
    }

    /// Number of lockout records held, elapsed or not
    pub fn lockout_count(&self) -> usize {
        self.lock_state().lockouts.len()
    }
}

impl Default for VerificationStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for VerificationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationStore")
            .field("config", &self.config)
            .field("stats", &self.stats())
            .finish()
    }
}
