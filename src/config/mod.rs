//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AHP_SMART_` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment runs fully in memory.
//!
//! # Example
//!
//! ```no_run
//! use ahp_smart::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Writing results to {}", config.export.output_path.display());
//! ```

mod auth;
mod error;
mod export;
mod runtime;
mod store;

pub use auth::{AuthBackend, AuthConfig};
pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use runtime::{Environment, LogFormat, RuntimeConfig};
pub use store::{StoreBackend, StoreConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Environment and logging
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Table store backend and table names
    #[serde(default)]
    pub store: StoreConfig,

    /// Auth backend and sign-up policy
    #[serde(default)]
    pub auth: AuthConfig,

    /// CSV export destination
    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AHP_SMART` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AHP_SMART__STORE__BACKEND=file` -> `store.backend = file`
    /// - `AHP_SMART__RUNTIME__LOG_FORMAT=json` -> `runtime.log_format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AHP_SMART")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let environment = self.runtime.environment;
        self.runtime.validate()?;
        self.store.validate(&environment)?;
        self.auth.validate()?;
        if self.auth.backend == AuthBackend::Supabase {
            self.store.validate_supabase(&environment)?;
        }
        self.export.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.runtime.is_production()
    }
}
