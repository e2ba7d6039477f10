//! In-Memory Table Store Adapter
//!
//! Keeps every table in memory. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::table_data::TableData;
use crate::ports::{RowFilter, SelectQuery, StoreResult, TableRow, TableStore};

/// In-memory storage for named tables
#[derive(Debug, Clone, Default)]
pub struct InMemoryTableStore {
    tables: Arc<RwLock<HashMap<String, TableData>>>,
}

impl InMemoryTableStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.tables.write().await.clear();
    }

    /// Number of rows currently in `table`
    pub async fn row_count(&self, table: &str) -> usize {
        self.tables
            .read()
            .await
            .get(table)
            .map_or(0, |t| t.rows.len())
    }
}

#[async_trait]
impl TableStore for InMemoryTableStore {
    async fn select(&self, table: &str, query: &SelectQuery) -> StoreResult<Vec<TableRow>> {
        let tables = self.tables.read().await;
        Ok(tables.get(table).map(|t| t.select(query)).unwrap_or_default())
    }

    async fn insert(&self, table: &str, row: TableRow) -> StoreResult<TableRow> {
        let mut tables = self.tables.write().await;
        Ok(tables.entry(table.to_string()).or_default().insert(row))
    }

    async fn update(&self, table: &str, filter: &RowFilter, changes: TableRow) -> StoreResult<usize> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .get_mut(table)
            .map_or(0, |t| t.update(filter, &changes)))
    }

    async fn delete(&self, table: &str, filter: &RowFilter) -> StoreResult<usize> {
        let mut tables = self.tables.write().await;
        Ok(tables.get_mut(table).map_or(0, |t| t.delete(filter)))
    }
}
