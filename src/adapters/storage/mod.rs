//! Storage Adapters
//!
//! Local implementations of the TableStore port.
//!
//! ## Available Adapters
//!
//! - **FileTableStore** - Stores each table as a YAML file on disk
//! - **InMemoryTableStore** - Stores tables in memory (testing/development)
//!
//! The remote PostgREST store lives in `adapters::supabase`.
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileTableStore, InMemoryTableStore};
//!
//! let store = FileTableStore::new("./data");
//! let store = InMemoryTableStore::new();
//! ```

mod file_table_store;
mod in_memory_table_store;
mod table_data;

pub use file_table_store::FileTableStore;
pub use in_memory_table_store::InMemoryTableStore;
pub use table_data::{TableData, ID_COLUMN};
