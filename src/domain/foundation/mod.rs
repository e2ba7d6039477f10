//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, authentication types, and error types
//! that form the vocabulary shared by every layer.

mod auth;
mod errors;
mod ids;

pub use auth::{AuthError, AuthSession, AuthenticatedUser, GREETING_FALLBACK};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{RowId, UserId};
