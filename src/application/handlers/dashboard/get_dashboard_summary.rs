//! GetDashboardSummaryHandler - Query handler for the landing-page summary.

use std::sync::Arc;

use tracing::warn;

use crate::domain::dashboard::{DashboardSummary, SystemStatus};
use crate::domain::decision::DecisionWorkspace;
use crate::domain::foundation::{AuthSession, AuthenticatedUser};
use crate::ports::{AuthProvider, RowFilter, SelectQuery, TableStore};

/// Handler for the dashboard summary.
///
/// Never fails: unreachable collaborators show up as `Degraded`.
pub struct GetDashboardSummaryHandler {
    store: Arc<dyn TableStore>,
    auth: Arc<dyn AuthProvider>,
    probe_table: String,
}

impl GetDashboardSummaryHandler {
    /// `probe_table` is read to check the store is reachable.
    pub fn new(store: Arc<dyn TableStore>, auth: Arc<dyn AuthProvider>, probe_table: impl Into<String>) -> Self {
        Self {
            store,
            auth,
            probe_table: probe_table.into(),
        }
    }

    pub async fn handle(&self, workspace: &DecisionWorkspace, session: Option<&AuthSession>) -> DashboardSummary {
        let mut status = SystemStatus::Active;

        let user = match session {
            Some(session) => self.resolve_user(session, &mut status).await,
            None => None,
        };

        let probe = SelectQuery::all().with_filter(RowFilter::eq("id", 0));
        if let Err(e) = self.store.select(&self.probe_table, &probe).await {
            warn!(error = %e, table = %self.probe_table, "Store unreachable");
            status = SystemStatus::Degraded;
        }

        DashboardSummary::build(workspace, user.as_ref(), status)
    }

    async fn resolve_user(&self, session: &AuthSession, status: &mut SystemStatus) -> Option<AuthenticatedUser> {
        match self.auth.current_user(session.access_token()).await {
            Ok(user) => Some(user),
            Err(e) if e.is_transient() => {
                warn!(error = %e, "Auth service unreachable");
                *status = SystemStatus::Degraded;
                Some(session.user.clone())
            }
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockAuthProvider;
    use crate::adapters::storage::InMemoryTableStore;
    use crate::application::handlers::test_support::{signed_in, FailingTableStore};
    use crate::domain::dashboard::PipelineStage;
    use crate::domain::decision::defaults::{default_criteria, sample_score_table};
    use crate::domain::foundation::AuthError;

    fn seeded() -> DecisionWorkspace {
        let mut workspace = DecisionWorkspace::with_criteria(default_criteria().unwrap());
        workspace.set_ratings(sample_score_table().unwrap());
        workspace
    }

    #[tokio::test]
    async fn summary_counts_workspace_contents() {
        let (auth, session) = signed_in().await;
        let handler = GetDashboardSummaryHandler::new(Arc::new(InMemoryTableStore::new()), auth, "tb_kriteria");

        let summary = handler.handle(&seeded(), Some(&session)).await;

        assert_eq!(summary.user_display_name.as_deref(), Some("Rani"));
        assert_eq!(summary.criteria_count, 5);
        assert_eq!(summary.alternative_count, 10);
        assert_eq!(summary.stage, PipelineStage::CriteriaDefined);
        assert_eq!(summary.status, SystemStatus::Active);
    }

    #[tokio::test]
    async fn anonymous_summary_has_no_user() {
        let handler = GetDashboardSummaryHandler::new(
            Arc::new(InMemoryTableStore::new()),
            Arc::new(MockAuthProvider::new()),
            "tb_kriteria",
        );

        let summary = handler.handle(&DecisionWorkspace::new(), None).await;
        assert!(summary.user_display_name.is_none());
        assert_eq!(summary.stage, PipelineStage::Empty);
    }

    #[tokio::test]
    async fn unreachable_store_is_degraded() {
        let (auth, session) = signed_in().await;
        let handler = GetDashboardSummaryHandler::new(Arc::new(FailingTableStore), auth, "tb_kriteria");

        let summary = handler.handle(&seeded(), Some(&session)).await;
        assert_eq!(summary.status, SystemStatus::Degraded);
        assert_eq!(summary.criteria_count, 5);
    }

    #[tokio::test]
    async fn auth_outage_keeps_session_user() {
        let (_auth, session) = signed_in().await;
        let auth = Arc::new(MockAuthProvider::new().with_error(AuthError::service_unavailable("down")));
        let handler = GetDashboardSummaryHandler::new(Arc::new(InMemoryTableStore::new()), auth, "tb_kriteria");

        let summary = handler.handle(&seeded(), Some(&session)).await;
        assert_eq!(summary.status, SystemStatus::Degraded);
        assert_eq!(summary.user_display_name.as_deref(), Some("Rani"));
    }
}
