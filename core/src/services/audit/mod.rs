//! Audit sink module for recording verification state transitions.

mod sink;

pub use sink::{AuditSink, MemoryAuditSink, TracingAuditSink};
