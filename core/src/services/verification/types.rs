//! Types for verification store results

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::VerifyOutcome;

/// Flattened `{success, message}` view of a verification attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyCodeResult {
    /// Whether the verification was successful
    pub success: bool,
    /// User-facing description of the outcome
    pub message: String,
    /// Number of remaining attempts (only after a wrong code that did not lock the user out)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_attempts: Option<u32>,
}

impl From<VerifyOutcome> for VerifyCodeResult {
    fn from(outcome: VerifyOutcome) -> Self {
        Self {
            success: outcome.is_success(),
            message: outcome.message(),
            remaining_attempts: outcome.remaining_attempts(),
        }
    }
}

/// Result of one reaper sweep
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepResult {
    /// Number of expired sessions deleted
    pub expired_sessions: usize,
    /// Number of elapsed lockouts deleted
    pub expired_lockouts: usize,
}

impl SweepResult {
    /// Get total number of entries removed
    pub fn total(&self) -> usize {
        self.expired_sessions + self.expired_lockouts
    }
}

/// Point-in-time sizes of the store's structures
///
/// Counts include entries that have expired but not yet been swept.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    /// Sessions currently held
    pub active_sessions: usize,
    /// Lockout records currently held
    pub locked_out_users: usize,
    /// Users who have verified at least once
    pub verified_users: usize,
}
