//! Table store configuration

use secrecy::Secret;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;
use super::runtime::Environment;

/// Which `TableStore` adapter to run
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    File,
    Supabase,
}

/// Table store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Directory for the file backend
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_criteria_table")]
    pub criteria_table: String,

    #[serde(default = "default_alternatives_table")]
    pub alternatives_table: String,

    /// Supabase project URL
    pub supabase_url: Option<String>,

    /// Supabase anon or service key
    pub supabase_api_key: Option<Secret<String>>,

    /// HTTP request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl StoreConfig {
    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the Supabase connection settings alone.
    ///
    /// Also used by the auth section when it runs against Supabase.
    pub fn validate_supabase(&self, environment: &Environment) -> Result<(), ValidationError> {
        let url = self
            .supabase_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or(ValidationError::MissingRequired("STORE__SUPABASE_URL"))?;
        if self.supabase_api_key.is_none() {
            return Err(ValidationError::MissingRequired("STORE__SUPABASE_API_KEY"));
        }
        if !url.starts_with("https://") && !url.starts_with("http://") {
            return Err(ValidationError::InvalidSupabaseUrl);
        }

        // In production, require HTTPS
        if *environment == Environment::Production && !url.starts_with("https://") {
            return Err(ValidationError::SupabaseUrlMustBeHttps);
        }
        Ok(())
    }

    /// Validate store configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        for table in [&self.criteria_table, &self.alternatives_table] {
            if table.is_empty() || !table.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(ValidationError::InvalidTableName(table.clone()));
            }
        }
        if self.criteria_table == self.alternatives_table {
            return Err(ValidationError::DuplicateTableName);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }

        match self.backend {
            StoreBackend::Memory => Ok(()),
            StoreBackend::File if self.data_dir.as_os_str().is_empty() => {
                Err(ValidationError::MissingRequired("STORE__DATA_DIR"))
            }
            StoreBackend::File => Ok(()),
            StoreBackend::Supabase => self.validate_supabase(environment),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            data_dir: default_data_dir(),
            criteria_table: default_criteria_table(),
            alternatives_table: default_alternatives_table(),
            supabase_url: None,
            supabase_api_key: None,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_criteria_table() -> String {
    "tb_kriteria".to_string()
}

fn default_alternatives_table() -> String {
    "tb_alternatif".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
