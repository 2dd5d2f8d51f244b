//! # OtpGate Core
//!
//! In-memory one-time passcode verification and lockout manager.
//! This crate contains the domain entities, the verification store with its
//! per-user state machine, code generation, the background reaper and the
//! audit sink that every state transition reports to.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
