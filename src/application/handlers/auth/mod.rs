//! Authentication handlers.

mod require_auth;
mod sign_in;
mod sign_out;
mod sign_up;

pub use require_auth::{require_auth, RequireAuthHandler};
pub use sign_in::{SignInCommand, SignInHandler};
pub use sign_out::SignOutHandler;
pub use sign_up::{SignUpCommand, SignUpHandler, SignUpResult, MIN_PASSWORD_LENGTH};
