//! Audit entry entity for recording verification state transitions.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::UserId;

/// Event types emitted by the verification store
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditEventType {
    SessionCreated,
    VerifySuccess,
    VerifyFailed,
    VerificationRemoved,
}

impl AuditEventType {
    /// Tag written to the audit line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SessionCreated => "SESSION_CREATED",
            Self::VerifySuccess => "VERIFY_SUCCESS",
            Self::VerifyFailed => "VERIFY_FAILED",
            Self::VerificationRemoved => "VERIFICATION_REMOVED",
        }
    }
}

impl std::str::FromStr for AuditEventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SESSION_CREATED" => Ok(Self::SessionCreated),
            "VERIFY_SUCCESS" => Ok(Self::VerifySuccess),
            "VERIFY_FAILED" => Ok(Self::VerifyFailed),
            "VERIFICATION_REMOVED" => Ok(Self::VerificationRemoved),
            _ => Err(format!("Unknown audit event type: {}", s)),
        }
    }
}

impl std::fmt::Display for AuditEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One audit record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the transition happened
    pub timestamp: DateTime<Utc>,
    /// User the transition applies to
    pub user_id: UserId,
    /// Transition tag
    pub event_type: AuditEventType,
    /// Free-text detail
    pub detail: String,
}

impl AuditEntry {
    pub fn new(
        timestamp: DateTime<Utc>,
        user_id: UserId,
        event_type: AuditEventType,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            user_id,
            event_type,
            detail: detail.into(),
        }
    }

    /// ISO-8601 timestamp in UTC with millisecond precision
    pub fn iso_timestamp(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Single-line rendering: `<timestamp> user=<id> <TAG> <detail>`
    pub fn to_log_line(&self) -> String {
        format!(
            "{} user={} {} {}",
            self.iso_timestamp(),
            self.user_id,
            self.event_type.as_str(),
            self.detail
        )
    }
}
