//! RequireAuthHandler - Guard for handlers that touch the store.

use std::sync::Arc;

use crate::domain::foundation::{AuthError, AuthSession, AuthenticatedUser};
use crate::ports::AuthProvider;

/// Resolves the session's user, or fails with `NotAuthenticated`.
///
/// Rejected tokens count as "not signed in"; transient provider errors are
/// passed through unchanged.
pub async fn require_auth(
    auth: &dyn AuthProvider,
    session: Option<&AuthSession>,
) -> Result<AuthenticatedUser, AuthError> {
    let session = session.ok_or(AuthError::NotAuthenticated)?;

    match auth.current_user(session.access_token()).await {
        Ok(user) => Ok(user),
        Err(e) if e.requires_reauthentication() => Err(AuthError::NotAuthenticated),
        Err(e) => Err(e),
    }
}

/// Handler wrapper around [`require_auth`].
pub struct RequireAuthHandler {
    auth: Arc<dyn AuthProvider>,
}

impl RequireAuthHandler {
    pub fn new(auth: Arc<dyn AuthProvider>) -> Self {
        Self { auth }
    }

    pub async fn handle(&self, session: Option<&AuthSession>) -> Result<AuthenticatedUser, AuthError> {
        require_auth(self.auth.as_ref(), session).await
    }
}
