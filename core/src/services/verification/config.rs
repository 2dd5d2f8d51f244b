//! Configuration for the verification store

use og_shared::OtpConfig;

use crate::domain::entities::{CODE_LENGTH, LOCKOUT_MINUTES, MAX_ATTEMPTS, OTP_EXPIRY_MINUTES};
use crate::errors::{DomainError, DomainResult};

/// Configuration for the verification store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationStoreConfig {
    /// Number of digits in a generated code
    pub code_length: usize,
    /// Number of minutes before a verification code expires
    pub code_expiration_minutes: i64,
    /// Maximum number of verification attempts allowed per code
    pub max_attempts: u32,
    /// Number of minutes a user stays locked out after the last failed attempt
    pub lockout_minutes: i64,
}

impl Default for VerificationStoreConfig {
    fn default() -> Self {
        Self {
            code_length: CODE_LENGTH,
            code_expiration_minutes: OTP_EXPIRY_MINUTES,
            max_attempts: MAX_ATTEMPTS,
            lockout_minutes: LOCKOUT_MINUTES,
        }
    }
}

impl VerificationStoreConfig {
    /// Reject values the state machine cannot work with
    pub fn validate(&self) -> DomainResult<()> {
        if self.code_length == 0 {
            return Err(DomainError::Validation {
                message: "code_length must be at least 1".to_string(),
            });
        }
        if self.code_expiration_minutes <= 0 {
            return Err(DomainError::Validation {
                message: "code_expiration_minutes must be positive".to_string(),
            });
        }
        if self.max_attempts == 0 {
            return Err(DomainError::Validation {
                message: "max_attempts must be at least 1".to_string(),
            });
        }
        if self.lockout_minutes <= 0 {
            return Err(DomainError::Validation {
                message: "lockout_minutes must be positive".to_string(),
            });
        }
        Ok(())
    }
}

impl TryFrom<&OtpConfig> for VerificationStoreConfig {
    type Error = DomainError;

    fn try_from(config: &OtpConfig) -> DomainResult<Self> {
        let store_config = Self {
            code_length: config.code_length,
            code_expiration_minutes: config.expiry_minutes,
            max_attempts: config.max_attempts,
            lockout_minutes: config.lockout_minutes,
        };
        store_config.validate()?;
        Ok(store_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = VerificationStoreConfig::default();
        assert_eq!(config.code_length, 6);
        assert_eq!(config.code_expiration_minutes, 5);
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.lockout_minutes, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_shared_defaults_agree_with_core_constants() {
        let from_shared = VerificationStoreConfig::try_from(&OtpConfig::default()).unwrap();
        assert_eq!(from_shared, VerificationStoreConfig::default());
    }

    #[test]
    fn test_rejects_zero_attempts() {
        let otp = OtpConfig {
            max_attempts: 0,
            ..Default::default()
        };
        let result = VerificationStoreConfig::try_from(&otp);
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[test]
    fn test_rejects_non_positive_windows() {
        let config = VerificationStoreConfig {
            lockout_minutes: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = VerificationStoreConfig {
            code_expiration_minutes: -1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
