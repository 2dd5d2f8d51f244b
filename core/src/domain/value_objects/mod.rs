//! Value objects representing immutable domain concepts.

pub mod user_id;
pub mod verify_outcome;

// Re-export commonly used types
pub use user_id::UserId;
pub use verify_outcome::VerifyOutcome;
