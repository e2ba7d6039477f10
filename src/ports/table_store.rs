//! Table Store Port - row-oriented persistence for the two working tables.
//!
//! Rows are loosely shaped JSON objects as the remote store returns them;
//! typed records are decoded from them with [`decode_row`]. Every method
//! returns a [`StoreResult`] so callers handle failures uniformly.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::domain::foundation::{DomainError, ErrorCode};

/// A single table row keyed by column name.
pub type TableRow = serde_json::Map<String, Value>;

/// Result of every table store operation.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during table store operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("Table not found: {0}")]
    NotFound(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Failed to (de)serialize row: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl StoreError {
    /// Whether retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::new(ErrorCode::DatabaseError, err.to_string())
    }
}

/// Row predicate on a single column.
#[derive(Debug, Clone, PartialEq)]
pub enum RowFilter {
    /// Every row
    All,
    /// Column equals value
    Eq(String, Value),
    /// Column is present and differs from value
    Neq(String, Value),
}

impl RowFilter {
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        RowFilter::Eq(column.into(), value.into())
    }

    pub fn neq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        RowFilter::Neq(column.into(), value.into())
    }

    /// Evaluates the filter against a row.
    pub fn matches(&self, row: &TableRow) -> bool {
        match self {
            RowFilter::All => true,
            RowFilter::Eq(column, value) => row.get(column).is_some_and(|v| values_equal(v, value)),
            RowFilter::Neq(column, value) => row
                .get(column)
                .is_some_and(|v| !v.is_null() && !values_equal(v, value)),
        }
    }
}

/// Numbers compare by value so `1` and `1.0` match.
fn values_equal(a: &Value, b: &Value) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}

/// Filter plus optional ascending sort column.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectQuery {
    pub filter: RowFilter,
    pub order_by: Option<String>,
}

impl SelectQuery {
    /// All rows, store order.
    pub fn all() -> Self {
        Self {
            filter: RowFilter::All,
            order_by: None,
        }
    }

    /// All rows sorted ascending by `column`.
    pub fn ordered_by(column: impl Into<String>) -> Self {
        Self {
            filter: RowFilter::All,
            order_by: Some(column.into()),
        }
    }

    pub fn with_filter(mut self, filter: RowFilter) -> Self {
        self.filter = filter;
        self
    }
}

/// Port for reading and replacing rows of named tables
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Select rows matching the query
    ///
    /// # Errors
    /// Returns `StoreError::Unavailable` if the store cannot be reached
    async fn select(&self, table: &str, query: &SelectQuery) -> StoreResult<Vec<TableRow>>;

    /// Insert a row, returning it as stored (with its assigned `id`)
    async fn insert(&self, table: &str, row: TableRow) -> StoreResult<TableRow>;

    /// Merge `changes` into every matching row, returning how many changed
    async fn update(&self, table: &str, filter: &RowFilter, changes: TableRow) -> StoreResult<usize>;

    /// Delete every matching row, returning how many were removed
    async fn delete(&self, table: &str, filter: &RowFilter) -> StoreResult<usize>;
}

/// Serializes a record into a row.
pub fn encode_row<T: Serialize>(record: &T) -> StoreResult<TableRow> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(StoreError::Serialization(format!("expected object, got {}", other))),
        Err(e) => Err(StoreError::Serialization(e.to_string())),
    }
}

/// Deserializes a row into a record.
pub fn decode_row<T: DeserializeOwned>(row: TableRow) -> StoreResult<T> {
    serde_json::from_value(Value::Object(row)).map_err(|e| StoreError::Serialization(e.to_string()))
}
