//! Traits for the store's injectable randomness and time sources

use chrono::{DateTime, Utc};

/// Source of random bytes for code generation
///
/// Production code must back this with a cryptographically secure generator.
pub trait RandomSource: Send + Sync {
    /// Fill `dest` entirely with random bytes
    fn fill_bytes(&self, dest: &mut [u8]);
}

/// Source of the current wall-clock time
pub trait Clock: Send + Sync {
    /// Current time in UTC
    fn now(&self) -> DateTime<Utc>;
}
