//! SaveCriteriaHandler - Command handler for persisting criteria and matrix.

use std::sync::Arc;

use tracing::info;

use crate::application::handlers::auth::require_auth;
use crate::application::handlers::table_rows::replace_records;
use crate::domain::decision::{CriterionRecord, DecisionWorkspace};
use crate::domain::foundation::{AuthSession, DomainError};
use crate::ports::{AuthProvider, TableStore};

/// Result of saving the criteria table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveCriteriaResult {
    /// Number of rows written.
    pub saved: usize,
}

/// Handler for saving criteria.
pub struct SaveCriteriaHandler {
    store: Arc<dyn TableStore>,
    auth: Arc<dyn AuthProvider>,
    table: String,
}

impl SaveCriteriaHandler {
    pub fn new(store: Arc<dyn TableStore>, auth: Arc<dyn AuthProvider>, table: impl Into<String>) -> Self {
        Self {
            store,
            auth,
            table: table.into(),
        }
    }

    /// Writes one row per criterion with its matrix row in `k1..k5`.
    pub async fn handle(
        &self,
        workspace: &DecisionWorkspace,
        session: Option<&AuthSession>,
    ) -> Result<SaveCriteriaResult, DomainError> {
        // 1. Authorize
        let user = require_auth(self.auth.as_ref(), session).await?;

        // 2. Flatten before touching the store
        let records = CriterionRecord::from_workspace(workspace.criteria(), workspace.matrix())?;

        // 3. Replace table contents
        let saved = replace_records(self.store.as_ref(), &self.table, &records).await?;

        info!(user_id = %user.id, count = saved, "Criteria saved");
        Ok(SaveCriteriaResult { saved })
    }
}
