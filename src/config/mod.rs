//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `CLUBTRACK_` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use clubtrack::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reminder lead: {} days", config.club.reminder_lead_days);
//! ```

mod club;
mod error;

pub use club::ClubConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Club policy knobs (reminder lead, statistics windows).
    #[serde(default)]
    pub club: ClubConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present (for development), then reads
    /// environment variables with the `CLUBTRACK` prefix, `__` separating
    /// nested values:
    ///
    /// - `CLUBTRACK__CLUB__REMINDER_LEAD_DAYS=5` -> `club.reminder_lead_days = 5`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into their
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CLUBTRACK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.club.validate()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            club: ClubConfig::default(),
        }
    }
}
