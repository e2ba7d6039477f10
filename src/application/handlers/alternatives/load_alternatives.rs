//! LoadAlternativesHandler - Command handler for restoring the rating table.

use std::sync::Arc;

use tracing::info;

use crate::application::handlers::auth::require_auth;
use crate::application::handlers::table_rows::load_records;
use crate::domain::decision::{AlternativeRecord, DecisionWorkspace};
use crate::domain::foundation::{AuthSession, DomainError};
use crate::ports::{AuthProvider, TableStore};

/// Result of loading the alternatives table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadAlternativesResult {
    pub loaded: usize,
}

/// Handler for loading alternatives.
pub struct LoadAlternativesHandler {
    store: Arc<dyn TableStore>,
    auth: Arc<dyn AuthProvider>,
    table: String,
}

impl LoadAlternativesHandler {
    pub fn new(store: Arc<dyn TableStore>, auth: Arc<dyn AuthProvider>, table: impl Into<String>) -> Self {
        Self {
            store,
            auth,
            table: table.into(),
        }
    }

    /// Reads the stored ratings for the workspace's current criteria.
    ///
    /// Each criterion reads its own `k` column, so the criteria must be
    /// set first.
    pub async fn handle(
        &self,
        workspace: &mut DecisionWorkspace,
        session: Option<&AuthSession>,
    ) -> Result<LoadAlternativesResult, DomainError> {
        // 1. Authorize
        let user = require_auth(self.auth.as_ref(), session).await?;

        // 2. Check prerequisites
        if workspace.criteria().is_empty() {
            return Err(DomainError::missing_prerequisite(
                "Define criteria before loading alternatives",
            ));
        }

        // 3. Read rows and rebuild the table
        let records: Vec<AlternativeRecord> = load_records(self.store.as_ref(), &self.table).await?;
        let table = AlternativeRecord::into_table(&records, workspace.criteria())?;

        // 4. Swap in
        workspace.set_ratings(table);

        info!(user_id = %user.id, count = records.len(), "Alternatives loaded");
        Ok(LoadAlternativesResult { loaded: records.len() })
    }
}
