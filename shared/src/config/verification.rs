//! One-time passcode policy configuration

use serde::{Deserialize, Serialize};

/// OTP verification policy
///
/// Values are read once at startup; the verification store never changes them at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Number of decimal digits in a generated code
    #[serde(default = "default_code_length")]
    pub code_length: usize,

    /// Minutes a code stays valid after issuance
    #[serde(default = "default_expiry_minutes")]
    pub expiry_minutes: i64,

    /// Verification attempts allowed per code
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Minutes a user stays locked out after exhausting attempts
    #[serde(default = "default_lockout_minutes")]
    pub lockout_minutes: i64,

    /// Seconds between reaper sweeps
    #[serde(default = "default_reaper_interval_seconds")]
    pub reaper_interval_seconds: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            code_length: default_code_length(),
            expiry_minutes: default_expiry_minutes(),
            max_attempts: default_max_attempts(),
            lockout_minutes: default_lockout_minutes(),
            reaper_interval_seconds: default_reaper_interval_seconds(),
        }
    }
}

impl OtpConfig {
    /// Relaxed policy for local development
    pub fn development() -> Self {
        Self {
            max_attempts: 5,
            lockout_minutes: 1,
            reaper_interval_seconds: 60,
            ..Default::default()
        }
    }

    /// Reaper interval as a std duration
    pub fn reaper_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.reaper_interval_seconds)
    }
}

fn default_code_length() -> usize {
    6
}

fn default_expiry_minutes() -> i64 {
    5
}

fn default_max_attempts() -> u32 {
    3
}

fn default_lockout_minutes() -> i64 {
    15
}

fn default_reaper_interval_seconds() -> u64 {
    300 // 5 minutes
}
