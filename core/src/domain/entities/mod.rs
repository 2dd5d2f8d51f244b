//! Domain entities tracked by the verification store.

pub mod audit;
pub mod lockout;
pub mod verification_session;

// Re-export commonly used types
pub use audit::{AuditEntry, AuditEventType};
pub use lockout::{LockoutRecord, LOCKOUT_MINUTES};
pub use verification_session::{
    ceil_minutes, VerificationSession, CODE_LENGTH, MAX_ATTEMPTS, OTP_EXPIRY_MINUTES,
    REAPER_INTERVAL_MINUTES,
};
