//! Verification module for one-time passcode authentication
//!
//! This module provides the complete in-memory verification workflow:
//! - Unbiased code generation from a cryptographically secure source
//! - Session issuance with a fixed expiry window
//! - Code verification with attempt tracking and lockout
//! - Verified-status and lockout queries
//! - Periodic reaping of expired sessions and lockouts

mod clock;
mod code_generator;
mod config;
mod reaper;
mod store;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use clock::{ManualClock, SystemClock};
pub use code_generator::{generate_code, OsRandomSource};
pub use config::VerificationStoreConfig;
pub use reaper::{ReaperHandle, SessionReaper};
pub use store::VerificationStore;
pub use traits::{Clock, RandomSource};
pub use types::{StoreStats, SweepResult, VerifyCodeResult};
