//! SignInHandler - Command handler for email/password sign-in.

use std::sync::Arc;

use secrecy::{ExposeSecret, Secret};
use tracing::info;

use crate::domain::foundation::{AuthSession, DomainError, ValidationError};
use crate::ports::AuthProvider;

/// Command to sign in.
#[derive(Debug, Clone)]
pub struct SignInCommand {
    pub email: String,
    pub password: Secret<String>,
}

/// Handler for signing in.
pub struct SignInHandler {
    auth: Arc<dyn AuthProvider>,
}

impl SignInHandler {
    pub fn new(auth: Arc<dyn AuthProvider>) -> Self {
        Self { auth }
    }

    pub async fn handle(&self, cmd: SignInCommand) -> Result<AuthSession, DomainError> {
        let email = cmd.email.trim();
        if email.is_empty() {
            return Err(ValidationError::empty_field("email").into());
        }
        if cmd.password.expose_secret().is_empty() {
            return Err(ValidationError::empty_field("password").into());
        }

        let session = self.auth.sign_in(email, &cmd.password).await?;
        info!(user_id = %session.user.id, "User signed in");
        Ok(session)
    }
}
