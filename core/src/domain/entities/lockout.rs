//! Lockout record for users who exhausted their verification attempts.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::verification_session::ceil_minutes;
use crate::domain::value_objects::UserId;

/// Default lockout window after the last failed attempt (15 minutes)
pub const LOCKOUT_MINUTES: i64 = 15;

/// Temporary ban on issuing new codes to a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockoutRecord {
    /// Locked user
    pub user_id: UserId,
    /// When the lockout started
    pub locked_at: DateTime<Utc>,
    /// When the lockout ends
    pub lockout_end: DateTime<Utc>,
}

impl LockoutRecord {
    /// Lockout starting at `now` for `lockout_minutes`
    pub fn new(user_id: UserId, now: DateTime<Utc>, lockout_minutes: i64) -> Self {
        Self {
            user_id,
            locked_at: now,
            lockout_end: now + Duration::minutes(lockout_minutes),
        }
    }

    /// Whether the window had elapsed at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.lockout_end
    }

    /// Minutes until the lockout ends, rounded up
    pub fn remaining_minutes(&self, now: DateTime<Utc>) -> i64 {
        ceil_minutes(self.lockout_end - now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lockout_window() {
        let now = Utc::now();
        let record = LockoutRecord::new(UserId(9), now, LOCKOUT_MINUTES);

        assert!(!record.is_expired_at(now));
        assert_eq!(record.remaining_minutes(now), 15);
        assert_eq!(record.remaining_minutes(now + Duration::seconds(30)), 15);
        assert_eq!(record.remaining_minutes(now + Duration::minutes(14) + Duration::seconds(59)), 1);
        assert!(record.is_expired_at(record.lockout_end));
        assert_eq!(record.remaining_minutes(record.lockout_end), 0);
    }
}
