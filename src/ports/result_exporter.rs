//! Result Exporter Port - renders a ranked result as a downloadable file.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::decision::RankedResult;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Port for rendering ranked results.
///
/// # Contract
///
/// Implementations must:
/// - Emit one record per entry, in the result's order
/// - Produce byte-identical output for identical results
#[async_trait]
pub trait ResultExporter: Send + Sync {
    /// Render the result.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::EmptyResult` when there is nothing to export.
    async fn export(&self, result: &RankedResult) -> Result<ExportedResult, ExportError>;
}

/// Rendered file with metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedResult {
    pub content: Vec<u8>,
    pub content_type: String,
    /// Suggested filename for download.
    pub filename: String,
}

/// Errors that can occur during result export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("No ranked alternatives to export")]
    EmptyResult,

    #[error("I/O error during export: {0}")]
    IoError(String),
}

impl From<ExportError> for DomainError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::EmptyResult => DomainError::missing_prerequisite(err.to_string()),
            ExportError::IoError(_) => DomainError::new(ErrorCode::ExportFailed, err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_is_a_missing_prerequisite() {
        let err: DomainError = ExportError::EmptyResult.into();
        assert_eq!(err.code, ErrorCode::MissingPrerequisite);
    }

    #[test]
    fn io_error_is_an_export_failure() {
        let err: DomainError = ExportError::IoError("disk full".into()).into();
        assert_eq!(err.code, ErrorCode::ExportFailed);
        assert!(err.message.contains("disk full"));
    }
}
