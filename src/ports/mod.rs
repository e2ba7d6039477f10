//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TableStore` - Row-oriented persistence for the criteria and
//!   alternatives tables
//! - `AuthProvider` - Email/password accounts and sessions
//! - `ResultExporter` - Rendering ranked results for download

mod auth_provider;
mod result_exporter;
mod table_store;

pub use auth_provider::{AuthProvider, SignUpOutcome, SignUpRequest};
pub use result_exporter::{ExportError, ExportedResult, ResultExporter};
pub use table_store::{
    decode_row, encode_row, RowFilter, SelectQuery, StoreError, StoreResult, TableRow, TableStore,
};
