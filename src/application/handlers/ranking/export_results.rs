//! ExportResultsHandler - Writes the ranked result to a file.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::domain::decision::DecisionWorkspace;
use crate::domain::foundation::DomainError;
use crate::ports::{ExportError, ResultExporter};

/// Command to export the current result.
#[derive(Debug, Clone)]
pub struct ExportResultsCommand {
    /// Destination file. `None` uses the exporter's suggested filename.
    pub path: Option<PathBuf>,
}

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResultsResult {
    pub path: PathBuf,
    pub bytes_written: usize,
    pub content_type: String,
}

/// Handler for exporting results.
pub struct ExportResultsHandler {
    exporter: Arc<dyn ResultExporter>,
}

impl ExportResultsHandler {
    pub fn new(exporter: Arc<dyn ResultExporter>) -> Self {
        Self { exporter }
    }

    pub async fn handle(
        &self,
        workspace: &DecisionWorkspace,
        cmd: ExportResultsCommand,
    ) -> Result<ExportResultsResult, DomainError> {
        // 1. Require a result
        let result = workspace
            .result()
            .ok_or_else(|| DomainError::missing_prerequisite("Compute the ranking before exporting"))?;

        // 2. Render
        let exported = self.exporter.export(result).await?;

        // 3. Write
        let path = cmd.path.unwrap_or_else(|| PathBuf::from(&exported.filename));
        tokio::fs::write(&path, &exported.content)
            .await
            .map_err(|e| ExportError::IoError(format!("{}: {}", path.display(), e)))?;

        info!(path = %path.display(), bytes = exported.content.len(), "Results exported");
        Ok(ExportResultsResult {
            path,
            bytes_written: exported.content.len(),
            content_type: exported.content_type,
        })
    }
}
