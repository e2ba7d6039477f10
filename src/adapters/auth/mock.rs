//! Mock authentication adapter for testing and local development.
//!
//! Keeps accounts and issued tokens in memory, so the full sign-up /
//! sign-in flow can run without a remote auth service.
//!
//! # Example
//!
//! ```ignore
//! use ahp_smart::adapters::auth::MockAuthProvider;
//!
//! let provider = MockAuthProvider::new()
//!     .with_account("owner@kopi.id", "rahasia", Some("Rani"));
//!
//! let session = provider.sign_in("owner@kopi.id", &Secret::new("rahasia".into())).await?;
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::foundation::{AuthError, AuthSession, AuthenticatedUser, UserId};
use crate::ports::{AuthProvider, SignUpOutcome, SignUpRequest};

#[derive(Debug)]
struct MockAccount {
    user: AuthenticatedUser,
    password: Secret<String>,
}

/// Mock auth provider.
///
/// Emails are matched case-insensitively. Tokens are random UUIDs.
#[derive(Debug, Default)]
pub struct MockAuthProvider {
    /// Accounts keyed by lowercased email
    accounts: RwLock<HashMap<String, MockAccount>>,
    /// Issued tokens and the email they belong to
    sessions: RwLock<HashMap<String, String>>,
    /// When set, sign-ups need `confirm_email` before signing in
    require_confirmation: bool,
    /// Optional error to return for every call (for error testing)
    force_error: RwLock<Option<AuthError>>,
}

fn account_key(email: &str) -> String {
    email.trim().to_lowercase()
}

impl MockAuthProvider {
    /// Creates a new provider with no accounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a confirmed account.
    pub fn with_account(mut self, email: &str, password: &str, display_name: Option<&str>) -> Self {
        self.insert_account(email, password, display_name, true);
        self
    }

    /// Adds an account whose email has not been confirmed yet.
    pub fn with_unconfirmed_account(mut self, email: &str, password: &str) -> Self {
        self.insert_account(email, password, None, false);
        self
    }

    /// Makes sign-ups wait for email confirmation.
    pub fn requiring_confirmation(mut self) -> Self {
        self.require_confirmation = true;
        self
    }

    /// Forces every call to return the specified error.
    pub fn with_error(mut self, error: AuthError) -> Self {
        *self.force_error.get_mut() = Some(error);
        self
    }

    /// Clears the forced error and returns to normal operation.
    pub async fn clear_error(&self) {
        *self.force_error.write().await = None;
    }

    /// Marks the account's email as confirmed.
    pub async fn confirm_email(&self, email: &str) -> bool {
        match self.accounts.write().await.get_mut(&account_key(email)) {
            Some(account) => {
                account.user.email_verified = true;
                true
            }
            None => false,
        }
    }

    /// Number of live tokens.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    fn insert_account(&mut self, email: &str, password: &str, display_name: Option<&str>, confirmed: bool) {
        let user = new_user(email, display_name.map(String::from), confirmed);
        self.accounts.get_mut().insert(
            account_key(email),
            MockAccount {
                user,
                password: Secret::new(password.to_string()),
            },
        );
    }

    async fn check_forced_error(&self) -> Result<(), AuthError> {
        match self.force_error.read().await.clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    async fn issue_session(&self, user: AuthenticatedUser) -> AuthSession {
        let token = Uuid::new_v4().to_string();
        self.sessions
            .write()
            .await
            .insert(token.clone(), account_key(&user.email));
        AuthSession::new(user, token)
    }
}

fn new_user(email: &str, display_name: Option<String>, confirmed: bool) -> AuthenticatedUser {
    AuthenticatedUser::new(UserId::generate(), email.trim(), display_name, confirmed)
}

#[async_trait]
impl AuthProvider for MockAuthProvider {
    async fn sign_in(&self, email: &str, password: &Secret<String>) -> Result<AuthSession, AuthError> {
        self.check_forced_error().await?;

        let user = {
            let accounts = self.accounts.read().await;
            let account = accounts
                .get(&account_key(email))
                .ok_or(AuthError::InvalidCredentials)?;
            if account.password.expose_secret() != password.expose_secret() {
                return Err(AuthError::InvalidCredentials);
            }
            if !account.user.email_verified {
                return Err(AuthError::EmailNotConfirmed);
            }
            account.user.clone()
        };

        Ok(self.issue_session(user).await)
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpOutcome, AuthError> {
        self.check_forced_error().await?;

        let key = account_key(&request.email);
        let user = {
            let mut accounts = self.accounts.write().await;
            if accounts.contains_key(&key) {
                return Err(AuthError::AlreadyRegistered);
            }
            let user = new_user(&request.email, request.display_name.clone(), !self.require_confirmation);
            accounts.insert(
                key,
                MockAccount {
                    user: user.clone(),
                    password: request.password.clone(),
                },
            );
            user
        };

        if self.require_confirmation {
            Ok(SignUpOutcome::ConfirmationRequired(user))
        } else {
            Ok(SignUpOutcome::SignedIn(self.issue_session(user).await))
        }
    }

    async fn sign_out(&self, session: &AuthSession) -> Result<(), AuthError> {
        self.check_forced_error().await?;
        self.sessions.write().await.remove(session.access_token());
        Ok(())
    }

    async fn current_user(&self, access_token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.check_forced_error().await?;

        let email = self
            .sessions
            .read()
            .await
            .get(access_token)
            .cloned()
            .ok_or(AuthError::InvalidToken)?;

        self.accounts
            .read()
            .await
            .get(&email)
            .map(|a| a.user.clone())
            .ok_or(AuthError::UserNotFound)
    }
}
