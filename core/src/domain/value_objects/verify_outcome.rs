//! Result of a single verification attempt

use serde::{Deserialize, Serialize};

/// Outcome of [`VerificationStore::verify`](crate::services::VerificationStore::verify)
///
/// Every variant except `Verified` is an expected failure, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum VerifyOutcome {
    /// Code matched; the session is consumed and the user is marked verified
    Verified,
    /// No session exists for the user
    NoActiveSession,
    /// The session had expired; it was discarded without counting an attempt
    Expired,
    /// Code mismatch with attempts still left on the session
    InvalidCode { remaining_attempts: u32 },
    /// Code mismatch on the last allowed attempt; the user is now locked out
    LockedOut { lockout_minutes: i64 },
}

impl VerifyOutcome {
    /// Whether the attempt succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, VerifyOutcome::Verified)
    }

    /// Remaining attempts on the session, when the outcome leaves one behind
    pub fn remaining_attempts(&self) -> Option<u32> {
        match self {
            VerifyOutcome::InvalidCode { remaining_attempts } => Some(*remaining_attempts),
            _ => None,
        }
    }

    /// User-facing message describing the outcome
    pub fn message(&self) -> String {
        match self {
            VerifyOutcome::Verified => "Verification successful.".to_string(),
            VerifyOutcome::NoActiveSession => {
                "No active verification session. Please request a new code.".to_string()
            }
            VerifyOutcome::Expired => {
                "Verification code expired. Please request a new code.".to_string()
            }
            VerifyOutcome::InvalidCode { remaining_attempts } => format!(
                "Invalid verification code. {} attempt(s) remaining.",
                remaining_attempts
            ),
            VerifyOutcome::LockedOut { lockout_minutes } => format!(
                "Too many failed attempts. You are locked out for {} minutes.",
                lockout_minutes
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_verified_is_success() {
        assert!(VerifyOutcome::Verified.is_success());
        assert!(!VerifyOutcome::NoActiveSession.is_success());
        assert!(!VerifyOutcome::Expired.is_success());
        assert!(!VerifyOutcome::InvalidCode { remaining_attempts: 1 }.is_success());
        assert!(!VerifyOutcome::LockedOut { lockout_minutes: 15 }.is_success());
    }

    #[test]
    fn test_messages_carry_counts() {
        let invalid = VerifyOutcome::InvalidCode { remaining_attempts: 2 };
        assert!(invalid.message().contains("2 attempt(s) remaining"));
        assert_eq!(invalid.remaining_attempts(), Some(2));

        let locked = VerifyOutcome::LockedOut { lockout_minutes: 15 };
        assert!(locked.message().contains("locked out for 15 minutes"));
        assert_eq!(locked.remaining_attempts(), None);

        assert!(VerifyOutcome::Expired.message().contains("expired"));
        assert!(VerifyOutcome::NoActiveSession.message().contains("request a new code"));
    }

    #[test]
    fn test_serializes_with_outcome_tag() {
        let json = serde_json::to_value(VerifyOutcome::InvalidCode { remaining_attempts: 1 }).unwrap();
        assert_eq!(json["outcome"], "invalid_code");
        assert_eq!(json["remaining_attempts"], 1);
    }
}
