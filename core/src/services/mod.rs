//! Business services containing the verification state machine and its collaborators.

pub mod audit;
pub mod verification;

// Re-export commonly used types
pub use audit::{AuditSink, MemoryAuditSink, TracingAuditSink};
pub use verification::{
    generate_code, Clock, ManualClock, OsRandomSource, RandomSource, ReaperHandle, SessionReaper,
    StoreStats, SweepResult, SystemClock, VerificationStore, VerificationStoreConfig,
    VerifyCodeResult,
};
