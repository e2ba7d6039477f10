//! Supabase adapters.
//!
//! - `rest_table_store` - `TableStore` over the PostgREST API (`/rest/v1`)
//! - `gotrue_auth_provider` - `AuthProvider` over the GoTrue API (`/auth/v1`)
//!
//! Both share one [`SupabaseConfig`].

mod gotrue_auth_provider;
mod rest_table_store;

pub use gotrue_auth_provider::GoTrueAuthProvider;
pub use rest_table_store::RestTableStore;

use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

/// Connection settings for a Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL (e.g. `https://xyz.supabase.co`), without trailing slash.
    pub url: String,
    /// Anon or service API key.
    api_key: Secret<String>,
    /// Request timeout.
    pub timeout: Duration,
}

impl SupabaseConfig {
    /// Creates a configuration with a 30 second timeout.
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            api_key: Secret::new(api_key.into()),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    fn http_client(&self) -> Client {
        Client::builder()
            .timeout(self.timeout)
            .build()
            .expect("Failed to create HTTP client")
    }
}
