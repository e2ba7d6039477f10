//! SignOutHandler - Command handler for ending a session.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{AuthSession, DomainError};
use crate::ports::AuthProvider;

/// Handler for signing out.
pub struct SignOutHandler {
    auth: Arc<dyn AuthProvider>,
}

impl SignOutHandler {
    pub fn new(auth: Arc<dyn AuthProvider>) -> Self {
        Self { auth }
    }

    /// Revokes the session. The caller drops it whatever the outcome.
    pub async fn handle(&self, session: AuthSession) -> Result<(), DomainError> {
        self.auth.sign_out(&session).await?;
        info!(user_id = %session.user.id, "User signed out");
        Ok(())
    }
}
