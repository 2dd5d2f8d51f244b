//! Domain-specific error types and error handling.

use thiserror::Error;

/// Errors raised by the verification store
///
/// Failed verifications are not errors; they are reported through
/// [`VerifyOutcome`](crate::domain::VerifyOutcome).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("Too many failed attempts. Please try again in {minutes_remaining} minute(s)")]
    LockedOut { minutes_remaining: i64 },
}

impl VerificationError {
    /// Stable machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            VerificationError::LockedOut { .. } => "locked_out",
        }
    }
}

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Verification(#[from] VerificationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

pub type VerificationResult<T> = Result<T, VerificationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locked_out_message_carries_minutes() {
        let error = VerificationError::LockedOut { minutes_remaining: 15 };
        assert_eq!(
            error.to_string(),
            "Too many failed attempts. Please try again in 15 minute(s)"
        );
        assert_eq!(error.code(), "locked_out");
    }

    #[test]
    fn test_verification_error_bridges_into_domain_error() {
        let domain: DomainError = VerificationError::LockedOut { minutes_remaining: 3 }.into();
        assert!(matches!(
            domain,
            DomainError::Verification(VerificationError::LockedOut { minutes_remaining: 3 })
        ));
        assert!(domain.to_string().contains("3 minute(s)"));
    }
}
