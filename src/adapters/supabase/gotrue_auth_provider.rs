//! GoTrue (Supabase Auth) provider.
//!
//! Email/password accounts over `/auth/v1`. Provider error messages are
//! mapped onto `AuthError` variants so callers show readable text.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::SupabaseConfig;
use crate::domain::foundation::{AuthError, AuthSession, AuthenticatedUser, UserId};
use crate::ports::{AuthProvider, SignUpOutcome, SignUpRequest};

/// Supabase GoTrue implementation of `AuthProvider`.
pub struct GoTrueAuthProvider {
    config: SupabaseConfig,
    client: Client,
}

#[derive(Serialize)]
struct PasswordCredentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpMetadata<'a>,
}

#[derive(Serialize)]
struct SignUpMetadata<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    fname: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct GoTrueUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    email_confirmed_at: Option<String>,
    #[serde(default)]
    user_metadata: Value,
}

#[derive(Debug, Deserialize)]
struct GoTrueSession {
    access_token: String,
    user: GoTrueUser,
}

impl GoTrueUser {
    fn into_domain(self) -> Result<AuthenticatedUser, AuthError> {
        let id = UserId::new(self.id).map_err(|e| AuthError::service_unavailable(e.to_string()))?;
        let display_name = ["fname", "full_name", "display_name", "name"]
            .iter()
            .find_map(|key| self.user_metadata.get(*key).and_then(Value::as_str))
            .map(String::from);

        Ok(AuthenticatedUser::new(
            id,
            self.email.unwrap_or_default(),
            display_name,
            self.email_confirmed_at.is_some(),
        ))
    }
}

impl GoTrueSession {
    fn into_domain(self) -> Result<AuthSession, AuthError> {
        Ok(AuthSession::new(self.user.into_domain()?, self.access_token))
    }
}

impl GoTrueAuthProvider {
    pub fn new(config: SupabaseConfig) -> Self {
        let client = config.http_client();
        Self { config, client }
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.url, path)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, AuthError> {
        let response = builder
            .header("apikey", self.config.api_key())
            .send()
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = map_error(status.as_u16(), &body);
        warn!(status = status.as_u16(), error = %error, "GoTrue request failed");
        Err(error)
    }

    async fn parse<T: for<'de> Deserialize<'de>>(response: Response) -> Result<T, AuthError> {
        response
            .json()
            .await
            .map_err(|e| AuthError::service_unavailable(format!("Failed to parse response: {}", e)))
    }
}

/// Pulls the human-readable message out of a GoTrue error body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            ["msg", "error_description", "message", "error"]
                .iter()
                .find_map(|key| v.get(*key).and_then(Value::as_str).map(String::from))
        })
        .unwrap_or_else(|| body.to_string())
}

fn map_error(status: u16, body: &str) -> AuthError {
    let message = error_message(body);

    if message.contains("Invalid login credentials") {
        AuthError::InvalidCredentials
    } else if message.contains("Email not confirmed") {
        AuthError::EmailNotConfirmed
    } else if message.contains("User already registered") || message.contains("already been registered") {
        AuthError::AlreadyRegistered
    } else {
        match status {
            401 | 403 => AuthError::InvalidToken,
            404 => AuthError::UserNotFound,
            408 | 429 | 500..=599 => AuthError::service_unavailable(format!("status {}: {}", status, message)),
            _ => AuthError::Rejected(message),
        }
    }
}

#[async_trait]
impl AuthProvider for GoTrueAuthProvider {
    async fn sign_in(&self, email: &str, password: &Secret<String>) -> Result<AuthSession, AuthError> {
        debug!(email, "GoTrue sign-in");
        let builder = self
            .client
            .post(self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .json(&PasswordCredentials {
                email,
                password: password.expose_secret(),
            });

        let session: GoTrueSession = Self::parse(self.send(builder).await?).await?;
        session.into_domain()
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpOutcome, AuthError> {
        debug!(email = %request.email, "GoTrue sign-up");
        let builder = self.client.post(self.auth_url("signup")).json(&SignUpBody {
            email: &request.email,
            password: request.password.expose_secret(),
            data: SignUpMetadata {
                fname: request.display_name.as_deref(),
            },
        });

        let body: Value = Self::parse(self.send(builder).await?).await?;
        parse_sign_up(body)
    }

    async fn sign_out(&self, session: &AuthSession) -> Result<(), AuthError> {
        let builder = self
            .client
            .post(self.auth_url("logout"))
            .bearer_auth(session.access_token());
        self.send(builder).await?;
        Ok(())
    }

    async fn current_user(&self, access_token: &str) -> Result<AuthenticatedUser, AuthError> {
        let builder = self.client.get(self.auth_url("user")).bearer_auth(access_token);
        let user: GoTrueUser = Self::parse(self.send(builder).await?).await?;
        user.into_domain()
    }
}

/// With confirmations off GoTrue returns a session, otherwise the bare user.
fn parse_sign_up(body: Value) -> Result<SignUpOutcome, AuthError> {
    let parse_error = |e: serde_json::Error| AuthError::service_unavailable(format!("Failed to parse response: {}", e));

    if body.get("access_token").is_some() {
        let session: GoTrueSession = serde_json::from_value(body).map_err(parse_error)?;
        Ok(SignUpOutcome::SignedIn(session.into_domain()?))
    } else {
        let user: GoTrueUser = serde_json::from_value(body).map_err(parse_error)?;
        Ok(SignUpOutcome::ConfirmationRequired(user.into_domain()?))
    }
}
