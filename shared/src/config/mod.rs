//! Configuration module with business-specific sub-modules
//!
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration
//! - `verification` - One-time passcode policy
//!
//! [`AppConfig::load`] layers built-in defaults, an optional per-environment TOML
//! file and `OTPGATE_`-prefixed environment variables, in that order of precedence.

pub mod environment;
pub mod server;
pub mod verification;

use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use verification::OtpConfig;

/// Prefix for environment variable overrides, e.g. `OTPGATE_VERIFICATION__MAX_ATTEMPTS=5`
pub const ENV_PREFIX: &str = "OTPGATE";

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// OTP verification policy
    #[serde(default)]
    pub verification: OtpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Built-in defaults for an environment
    pub fn for_environment(environment: Environment) -> Self {
        let (verification, server) = if environment.is_development() {
            (OtpConfig::development(), ServerConfig::default())
        } else {
            (OtpConfig::default(), ServerConfig::new("0.0.0.0", 8080))
        };

        Self {
            environment,
            server,
            verification,
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load configuration for the environment named by `ENVIRONMENT`/`ENV`/`RUST_ENV`
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_for(Environment::from_env())
    }

    /// Load configuration for a specific environment
    pub fn load_for(environment: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::for_environment(environment);

        Config::builder()
            .add_source(Config::try_from(&defaults)?)
            .add_source(File::with_name(environment.config_file()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
