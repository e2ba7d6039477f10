//! LoadCriteriaHandler - Command handler for restoring criteria and matrix.

use std::sync::Arc;

use tracing::info;

use crate::application::handlers::auth::require_auth;
use crate::application::handlers::table_rows::load_records;
use crate::domain::decision::{CriterionRecord, DecisionWorkspace};
use crate::domain::foundation::{AuthSession, DomainError};
use crate::ports::{AuthProvider, TableStore};

/// Result of loading the criteria table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadCriteriaResult {
    /// Number of rows read.
    pub loaded: usize,
}

/// Handler for loading criteria.
pub struct LoadCriteriaHandler {
    store: Arc<dyn TableStore>,
    auth: Arc<dyn AuthProvider>,
    table: String,
}

impl LoadCriteriaHandler {
    pub fn new(store: Arc<dyn TableStore>, auth: Arc<dyn AuthProvider>, table: impl Into<String>) -> Self {
        Self {
            store,
            auth,
            table: table.into(),
        }
    }

    /// Replaces the workspace criteria and matrix with the stored rows.
    ///
    /// An empty table leaves the workspace as it is. Any failure leaves it
    /// unchanged.
    pub async fn handle(
        &self,
        workspace: &mut DecisionWorkspace,
        session: Option<&AuthSession>,
    ) -> Result<LoadCriteriaResult, DomainError> {
        // 1. Authorize
        let user = require_auth(self.auth.as_ref(), session).await?;

        // 2. Read rows
        let records: Vec<CriterionRecord> = load_records(self.store.as_ref(), &self.table).await?;
        if records.is_empty() {
            info!(user_id = %user.id, table = %self.table, "No stored criteria");
            return Ok(LoadCriteriaResult { loaded: 0 });
        }

        // 3. Rebuild and swap in
        let (criteria, matrix) = CriterionRecord::into_workspace(&records)?;
        workspace.load_criteria(criteria, matrix)?;

        info!(user_id = %user.id, count = records.len(), "Criteria loaded");
        Ok(LoadCriteriaResult { loaded: records.len() })
    }
}
