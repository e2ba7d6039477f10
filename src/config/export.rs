//! Export configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Result export configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Where the CSV ranking is written
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

impl ExportConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyOutputPath);
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("hasil_ahp_smart.csv")
}
