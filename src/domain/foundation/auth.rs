//! Authentication types for the domain layer.
//!
//! These types describe a signed-in user and the session that proves it.
//! They have **no provider dependencies**: the mock adapter and the hosted
//! GoTrue adapter both populate them through the `AuthProvider` port.

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

use super::{DomainError, ErrorCode, UserId};

/// Greeting used when the user has no display name.
pub const GREETING_FALLBACK: &str = "User";

/// A user known to the auth provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the auth provider.
    pub id: UserId,

    /// User's email address.
    pub email: String,

    /// Full name captured at sign-up, if any.
    pub display_name: Option<String>,

    /// Whether the email address has been confirmed.
    pub email_verified: bool,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        display_name: Option<String>,
        email_verified: bool,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            display_name,
            email_verified,
        }
    }

    /// Name to greet the user by. Falls back to [`GREETING_FALLBACK`].
    pub fn greeting_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(GREETING_FALLBACK)
    }
}

/// A signed-in session: the user plus the bearer token the provider issued.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: AuthenticatedUser,
    access_token: Secret<String>,
    pub signed_in_at: DateTime<Utc>,
}

impl AuthSession {
    /// Creates a session stamped with the current time.
    pub fn new(user: AuthenticatedUser, access_token: impl Into<String>) -> Self {
        Self {
            user,
            access_token: Secret::new(access_token.into()),
            signed_in_at: Utc::now(),
        }
    }

    /// Exposes the bearer token for provider calls.
    pub fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }
}

/// Authentication errors, phrased for the person at the keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email not confirmed. Please check your inbox.")]
    EmailNotConfirmed,

    #[error("Email is already registered")]
    AlreadyRegistered,

    #[error("Please sign in first")]
    NotAuthenticated,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("User not found")]
    UserNotFound,

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this error indicates the user should sign in again.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            AuthError::NotAuthenticated | AuthError::InvalidToken | AuthError::UserNotFound
        )
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}

impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        let code = if err.requires_reauthentication() {
            ErrorCode::Unauthorized
        } else {
            ErrorCode::AuthenticationFailed
        };
        DomainError::new(code, err.to_string())
    }
}
