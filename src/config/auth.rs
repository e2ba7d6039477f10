//! Authentication configuration

use secrecy::Secret;
use serde::Deserialize;

use super::error::ValidationError;

/// Which `AuthProvider` adapter to run
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthBackend {
    /// In-memory accounts (development)
    #[default]
    Mock,
    /// Supabase GoTrue, sharing the store's project settings
    Supabase,
}

/// Authentication configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub backend: AuthBackend,

    /// Account the command-line pipeline signs in with
    #[serde(default = "default_email")]
    pub email: String,

    /// Password for `email`
    pub password: Option<Secret<String>>,

    /// Shortest password accepted at sign-up
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,

    /// Keep the session issued at sign-up
    #[serde(default = "default_auto_login")]
    pub auto_login: bool,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// The Supabase backend needs a password; the mock creates the account
    /// with whatever it is given.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__EMAIL"));
        }
        if self.min_password_length == 0 || self.min_password_length > 128 {
            return Err(ValidationError::InvalidPasswordLength);
        }
        if self.backend == AuthBackend::Supabase && self.password.is_none() {
            return Err(ValidationError::MissingRequired("AUTH__PASSWORD"));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            backend: AuthBackend::default(),
            email: default_email(),
            password: None,
            min_password_length: default_min_password_length(),
            auto_login: default_auto_login(),
        }
    }
}

fn default_email() -> String {
    "demo@ahp-smart.local".to_string()
}

fn default_min_password_length() -> usize {
    6
}

fn default_auto_login() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_config_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.backend, AuthBackend::Mock);
        assert_eq!(config.min_password_length, 6);
        assert!(config.auto_login);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_supabase_requires_password() {
        let config = AuthConfig {
            backend: AuthBackend::Supabase,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::MissingRequired("AUTH__PASSWORD")));

        let config = AuthConfig {
            backend: AuthBackend::Supabase,
            password: Some(Secret::new("rahasia".to_string())),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_password_length_bounds() {
        let config = AuthConfig {
            min_password_length: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidPasswordLength));
    }
}
