//! Verification session entity for one outstanding one-time passcode.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::UserId;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (5 minutes)
pub const OTP_EXPIRY_MINUTES: i64 = 5;

/// Maximum number of verification attempts allowed per code
pub const MAX_ATTEMPTS: u32 = 3;

/// Default interval between reaper sweeps (5 minutes)
pub const REAPER_INTERVAL_MINUTES: u64 = 5;

/// Whole minutes in `duration`, rounded up; zero for non-positive durations
///
/// One second left reads as one minute, never zero.
pub fn ceil_minutes(duration: Duration) -> i64 {
    let millis = duration.num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    (millis + 59_999) / 60_000
}

/// Outstanding OTP challenge for a single user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationSession {
    /// Correlation id for log lines; never shown to the user
    pub session_id: Uuid,

    /// User the code was issued to
    pub user_id: UserId,

    /// The numeric code to match
    pub code: String,

    /// Timestamp when the code was issued
    pub created_at: DateTime<Utc>,

    /// Timestamp after which the code is no longer accepted
    pub expires_at: DateTime<Utc>,

    /// Number of verification attempts made so far
    pub attempts: u32,

    /// Set once the code has matched
    pub verified: bool,
}

impl VerificationSession {
    /// Creates a fresh session issued at `now`
    pub fn new(user_id: UserId, code: String, now: DateTime<Utc>, expiration_minutes: i64) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            user_id,
            code,
            created_at: now,
            expires_at: now + Duration::minutes(expiration_minutes),
            attempts: 0,
            verified: false,
        }
    }

    /// Whether the code had expired at `now`
    ///
    /// The expiry instant itself is still valid.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Attempts left before the session is exhausted
    pub fn remaining_attempts(&self, max_attempts: u32) -> u32 {
        max_attempts.saturating_sub(self.attempts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_new_session() {
        let now = fixed_now();
        let session = VerificationSession::new(UserId(7), "123456".to_string(), now, OTP_EXPIRY_MINUTES);

        assert_eq!(session.user_id, UserId(7));
        assert_eq!(session.attempts, 0);
        assert!(!session.verified);
        assert_eq!(session.expires_at, now + Duration::minutes(5));
        assert_eq!(session.remaining_attempts(MAX_ATTEMPTS), 3);
    }

    #[test]
    fn test_expiry_boundary() {
        let now = fixed_now();
        let session = VerificationSession::new(UserId(7), "123456".to_string(), now, 5);

        assert!(!session.is_expired_at(session.expires_at));
        assert!(session.is_expired_at(session.expires_at + Duration::milliseconds(1)));
    }

    #[test]
    fn test_ceil_minutes() {
        assert_eq!(ceil_minutes(Duration::seconds(1)), 1);
        assert_eq!(ceil_minutes(Duration::seconds(60)), 1);
        assert_eq!(ceil_minutes(Duration::seconds(61)), 2);
        assert_eq!(ceil_minutes(Duration::minutes(15)), 15);
        assert_eq!(ceil_minutes(Duration::zero()), 0);
        assert_eq!(ceil_minutes(Duration::seconds(-30)), 0);
    }

    #[test]
    fn test_remaining_attempts_saturates() {
        let mut session = VerificationSession::new(UserId(1), "000000".to_string(), fixed_now(), 5);
        session.attempts = 5;
        assert_eq!(session.remaining_attempts(MAX_ATTEMPTS), 0);
    }
}
