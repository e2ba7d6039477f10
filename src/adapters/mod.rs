//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - In-memory and YAML file table stores
//! - `supabase` - PostgREST table store and GoTrue auth provider
//! - `auth` - Mock auth provider
//! - `export` - CSV result exporter

pub mod auth;
pub mod export;
pub mod storage;
pub mod supabase;

pub use auth::MockAuthProvider;
pub use export::CsvResultExporter;
pub use storage::{FileTableStore, InMemoryTableStore};
pub use supabase::{GoTrueAuthProvider, RestTableStore, SupabaseConfig};
