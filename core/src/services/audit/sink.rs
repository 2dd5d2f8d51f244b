//! Audit sinks for verification state transitions.
//!
//! The store hands every transition to an [`AuditSink`] after releasing its lock,
//! so sinks never run inside the store's critical section.

use std::sync::{Mutex, PoisonError};

use crate::domain::entities::{AuditEntry, AuditEventType};
use crate::domain::value_objects::UserId;

/// Destination for audit entries
pub trait AuditSink: Send + Sync {
    /// Record one entry
    fn record(&self, entry: &AuditEntry);
}

/// Writes each entry as a structured `tracing` event on the `og_core::audit` target
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, entry: &AuditEntry) {
        match entry.event_type {
            AuditEventType::VerifyFailed => tracing::warn!(
                target: "og_core::audit",
                timestamp = %entry.iso_timestamp(),
                user_id = %entry.user_id,
                event = entry.event_type.as_str(),
                detail = %entry.detail,
                "{}",
                entry.to_log_line()
            ),
            _ => tracing::info!(
                target: "og_core::audit",
                timestamp = %entry.iso_timestamp(),
                user_id = %entry.user_id,
                event = entry.event_type.as_str(),
                detail = %entry.detail,
                "{}",
                entry.to_log_line()
            ),
        }
    }
}

/// Keeps entries in memory; intended for tests and diagnostics
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    entries: Mutex<Vec<AuditEntry>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded entries, oldest first
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Event tags recorded for one user, oldest first
    pub fn events_for(&self, user_id: UserId) -> Vec<AuditEventType> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.event_type)
            .collect()
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditSink for MemoryAuditSink {
    fn record(&self, entry: &AuditEntry) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry.clone());
    }
}
