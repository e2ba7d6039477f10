//! Shared row plumbing for the two persisted tables.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::ports::{decode_row, encode_row, RowFilter, SelectQuery, StoreResult, TableStore};

/// Column every stored row is keyed and ordered by.
pub const ID_COLUMN: &str = "id";

/// Loads every row of `table` in id order.
pub async fn load_records<T: DeserializeOwned>(store: &dyn TableStore, table: &str) -> StoreResult<Vec<T>> {
    let rows = store.select(table, &SelectQuery::ordered_by(ID_COLUMN)).await?;
    debug!(table, rows = rows.len(), "Loaded rows");
    rows.into_iter().map(decode_row).collect()
}

/// Replaces the contents of `table`: delete everything, then insert in order.
///
/// Records are encoded before anything is deleted, so a serialization
/// failure leaves the table as it was.
pub async fn replace_records<T: Serialize>(store: &dyn TableStore, table: &str, records: &[T]) -> StoreResult<usize> {
    let rows = records.iter().map(encode_row).collect::<StoreResult<Vec<_>>>()?;

    let removed = store.delete(table, &RowFilter::neq(ID_COLUMN, 0)).await?;
    for row in rows.iter().cloned() {
        store.insert(table, row).await?;
    }

    debug!(table, removed, inserted = rows.len(), "Replaced rows");
    Ok(rows.len())
}
