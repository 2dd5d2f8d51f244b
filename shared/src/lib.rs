//! Shared configuration for the OtpGate server
//!
//! This crate provides the configuration types used across all server modules:
//! - Environment detection and logging configuration
//! - HTTP server configuration
//! - One-time passcode policy (code length, expiry, attempts, lockout, reaper)
//! - Layered loading from defaults, TOML files and environment variables

pub mod config;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, LogFormat, LoggingConfig, OtpConfig, ServerConfig};
