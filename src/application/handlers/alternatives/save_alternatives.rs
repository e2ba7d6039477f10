//! SaveAlternativesHandler - Command handler for persisting the rating table.

use std::sync::Arc;

use tracing::info;

use crate::application::handlers::auth::require_auth;
use crate::application::handlers::table_rows::replace_records;
use crate::domain::decision::{AlternativeRecord, DecisionWorkspace};
use crate::domain::foundation::{AuthSession, DomainError};
use crate::ports::{AuthProvider, TableStore};

/// Result of saving the alternatives table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveAlternativesResult {
    pub saved: usize,
}

/// Handler for saving alternatives.
pub struct SaveAlternativesHandler {
    store: Arc<dyn TableStore>,
    auth: Arc<dyn AuthProvider>,
    table: String,
}

impl SaveAlternativesHandler {
    pub fn new(store: Arc<dyn TableStore>, auth: Arc<dyn AuthProvider>, table: impl Into<String>) -> Self {
        Self {
            store,
            auth,
            table: table.into(),
        }
    }

    pub async fn handle(
        &self,
        workspace: &DecisionWorkspace,
        session: Option<&AuthSession>,
    ) -> Result<SaveAlternativesResult, DomainError> {
        // 1. Authorize
        let user = require_auth(self.auth.as_ref(), session).await?;

        // 2. Flatten before touching the store
        let ratings = workspace
            .ratings()
            .ok_or_else(|| DomainError::missing_prerequisite("Enter alternative ratings before saving"))?;
        let records = AlternativeRecord::from_table(ratings)?;

        // 3. Replace table contents
        let saved = replace_records(self.store.as_ref(), &self.table, &records).await?;

        info!(user_id = %user.id, count = saved, "Alternatives saved");
        Ok(SaveAlternativesResult { saved })
    }
}
