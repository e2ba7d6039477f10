//! Auth provider port - email/password accounts in front of the store.
//!
//! # Contract
//!
//! Implementations must:
//! - Map bad credentials to `AuthError::InvalidCredentials`
//! - Map unconfirmed accounts to `AuthError::EmailNotConfirmed`
//! - Map duplicate sign-ups to `AuthError::AlreadyRegistered`
//! - Return `AuthError::ServiceUnavailable` for transient errors

use async_trait::async_trait;
use secrecy::Secret;

use crate::domain::foundation::{AuthError, AuthSession, AuthenticatedUser};

/// New account details.
#[derive(Debug, Clone)]
pub struct SignUpRequest {
    pub email: String,
    pub password: Secret<String>,
    pub display_name: Option<String>,
}

/// What the provider did with a sign-up.
#[derive(Debug, Clone)]
pub enum SignUpOutcome {
    /// Account created and a session issued straight away
    SignedIn(AuthSession),
    /// Account created but the email must be confirmed before signing in
    ConfirmationRequired(AuthenticatedUser),
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Exchange email and password for a session.
    async fn sign_in(&self, email: &str, password: &Secret<String>) -> Result<AuthSession, AuthError>;

    /// Create an account.
    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpOutcome, AuthError>;

    /// Revoke the session's token.
    async fn sign_out(&self, session: &AuthSession) -> Result<(), AuthError>;

    /// Resolve the user behind an access token.
    ///
    /// * `Err(AuthError::InvalidToken)` - token expired, revoked or unknown
    async fn current_user(&self, access_token: &str) -> Result<AuthenticatedUser, AuthError>;
}
