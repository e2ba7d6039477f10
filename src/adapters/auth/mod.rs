//! Authentication adapters.
//!
//! Implementations of the `AuthProvider` port:
//!
//! - `mock` - In-memory accounts for tests and local development
//! - `supabase::GoTrueAuthProvider` - Production Supabase Auth (see `adapters::supabase`)

mod mock;

pub use mock::MockAuthProvider;
