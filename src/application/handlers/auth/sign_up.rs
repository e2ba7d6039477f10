//! SignUpHandler - Command handler for account registration.

use std::sync::Arc;

use secrecy::{ExposeSecret, Secret};
use tracing::info;

use crate::domain::foundation::{AuthSession, AuthenticatedUser, DomainError, ValidationError};
use crate::ports::{AuthProvider, SignUpOutcome, SignUpRequest};

/// Default minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Command to register a new account.
#[derive(Debug, Clone)]
pub struct SignUpCommand {
    pub email: String,
    pub password: Secret<String>,
    pub confirm_password: Secret<String>,
    pub display_name: Option<String>,
}

/// Result of a successful registration.
#[derive(Debug, Clone)]
pub enum SignUpResult {
    /// Account created and a session kept.
    SignedIn(AuthSession),
    /// Account created; the caller signs in separately.
    Registered(AuthenticatedUser),
    /// Account created but the email must be confirmed first.
    ConfirmationRequired(AuthenticatedUser),
}

/// Handler for registering accounts.
pub struct SignUpHandler {
    auth: Arc<dyn AuthProvider>,
    min_password_length: usize,
    auto_login: bool,
}

impl SignUpHandler {
    pub fn new(auth: Arc<dyn AuthProvider>) -> Self {
        Self {
            auth,
            min_password_length: MIN_PASSWORD_LENGTH,
            auto_login: true,
        }
    }

    pub fn with_min_password_length(mut self, length: usize) -> Self {
        self.min_password_length = length;
        self
    }

    /// When off, a session issued by the provider is signed out again.
    pub fn with_auto_login(mut self, auto_login: bool) -> Self {
        self.auto_login = auto_login;
        self
    }

    pub async fn handle(&self, cmd: SignUpCommand) -> Result<SignUpResult, DomainError> {
        // 1. Validate input
        let request = self.validate(cmd)?;

        // 2. Register with the provider
        let outcome = self.auth.sign_up(&request).await?;

        // 3. Apply the login policy
        match outcome {
            SignUpOutcome::SignedIn(session) if self.auto_login => {
                info!(user_id = %session.user.id, "Account registered and signed in");
                Ok(SignUpResult::SignedIn(session))
            }
            SignUpOutcome::SignedIn(session) => {
                self.auth.sign_out(&session).await?;
                info!(user_id = %session.user.id, "Account registered");
                Ok(SignUpResult::Registered(session.user))
            }
            SignUpOutcome::ConfirmationRequired(user) => {
                info!(user_id = %user.id, "Account registered, awaiting email confirmation");
                Ok(SignUpResult::ConfirmationRequired(user))
            }
        }
    }

    fn validate(&self, cmd: SignUpCommand) -> Result<SignUpRequest, ValidationError> {
        let email = cmd.email.trim();
        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        let display_name = match cmd.display_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Err(ValidationError::empty_field("display_name")),
        };
        let password = cmd.password.expose_secret();
        if password.is_empty() {
            return Err(ValidationError::empty_field("password"));
        }
        if password != cmd.confirm_password.expose_secret() {
            return Err(ValidationError::invalid_format(
                "confirm_password",
                "Passwords do not match",
            ));
        }
        if password.chars().count() < self.min_password_length {
            return Err(ValidationError::invalid_format(
                "password",
                format!("Password must be at least {} characters", self.min_password_length),
            ));
        }

        Ok(SignUpRequest {
            email: email.to_string(),
            password: cmd.password,
            display_name: Some(display_name),
        })
    }
}
