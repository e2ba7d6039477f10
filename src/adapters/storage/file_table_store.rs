//! File-based Table Store Adapter
//!
//! Stores each table as one YAML file (`<table>.yaml`) under a base
//! directory. Writes are read-modify-write under a single lock.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use super::table_data::TableData;
use crate::ports::{RowFilter, SelectQuery, StoreError, StoreResult, TableRow, TableStore};

/// File-based storage for named tables
#[derive(Debug)]
pub struct FileTableStore {
    base_path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileTableStore {
    /// Create a new file store with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let store = FileTableStore::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the file backing `table`
    fn table_path(&self, table: &str) -> StoreResult<PathBuf> {
        let valid = !table.is_empty()
            && table
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::Rejected {
                status: 400,
                message: format!("invalid table name '{}'", table),
            });
        }
        Ok(self.base_path.join(format!("{}.yaml", table)))
    }

    async fn read_table(&self, path: &Path) -> StoreResult<TableData> {
        if !path.exists() {
            return Ok(TableData::default());
        }

        let yaml = fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;

        serde_yaml::from_str(&yaml).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    async fn write_table(&self, path: &Path, data: &TableData) -> StoreResult<()> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;

        let yaml = serde_yaml::to_string(data).map_err(|e| StoreError::Serialization(e.to_string()))?;

        fs::write(path, yaml)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))
    }
}

#[async_trait]
impl TableStore for FileTableStore {
    async fn select(&self, table: &str, query: &SelectQuery) -> StoreResult<Vec<TableRow>> {
        let path = self.table_path(table)?;
        Ok(self.read_table(&path).await?.select(query))
    }

    async fn insert(&self, table: &str, row: TableRow) -> StoreResult<TableRow> {
        let path = self.table_path(table)?;
        let _guard = self.write_lock.lock().await;

        let mut data = self.read_table(&path).await?;
        let stored = data.insert(row);
        self.write_table(&path, &data).await?;
        Ok(stored)
    }

    async fn update(&self, table: &str, filter: &RowFilter, changes: TableRow) -> StoreResult<usize> {
        let path = self.table_path(table)?;
        let _guard = self.write_lock.lock().await;

        let mut data = self.read_table(&path).await?;
        let changed = data.update(filter, &changes);
        if changed > 0 {
            self.write_table(&path, &data).await?;
        }
        Ok(changed)
    }

    async fn delete(&self, table: &str, filter: &RowFilter) -> StoreResult<usize> {
        let path = self.table_path(table)?;
        let _guard = self.write_lock.lock().await;

        let mut data = self.read_table(&path).await?;
        let removed = data.delete(filter);
        if removed > 0 {
            self.write_table(&path, &data).await?;
        }
        Ok(removed)
    }
}
