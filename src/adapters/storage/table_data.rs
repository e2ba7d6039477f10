//! Row storage shared by the in-memory and file table stores.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

use crate::ports::{RowFilter, SelectQuery, TableRow};

/// Column holding the store-assigned row id.
pub const ID_COLUMN: &str = "id";

/// Contents of one table plus its id sequence.
///
/// Ids are never reused, even after the rows holding them are deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    pub next_id: i64,
    pub rows: Vec<TableRow>,
}

impl Default for TableData {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: Vec::new(),
        }
    }
}

impl TableData {
    pub fn select(&self, query: &SelectQuery) -> Vec<TableRow> {
        let mut rows: Vec<TableRow> = self
            .rows
            .iter()
            .filter(|row| query.filter.matches(row))
            .cloned()
            .collect();

        if let Some(column) = &query.order_by {
            rows.sort_by(|a, b| compare_values(a.get(column), b.get(column)));
        }
        rows
    }

    /// Appends a row, assigning the next id when the row has none.
    pub fn insert(&mut self, mut row: TableRow) -> TableRow {
        match row.get(ID_COLUMN).and_then(Value::as_i64) {
            Some(id) => self.next_id = self.next_id.max(id + 1),
            None => {
                row.insert(ID_COLUMN.to_string(), Value::from(self.next_id));
                self.next_id += 1;
            }
        }
        self.rows.push(row.clone());
        row
    }

    pub fn update(&mut self, filter: &RowFilter, changes: &TableRow) -> usize {
        let mut changed = 0;
        for row in self.rows.iter_mut().filter(|row| filter.matches(row)) {
            for (column, value) in changes {
                row.insert(column.clone(), value.clone());
            }
            changed += 1;
        }
        changed
    }

    pub fn delete(&mut self, filter: &RowFilter) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| !filter.matches(row));
        before - self.rows.len()
    }
}

/// Ascending order; numbers by value, strings lexically, missing or null last.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => a.to_string().cmp(&b.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> TableRow {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn insert_assigns_sequential_ids() {
        let mut table = TableData::default();
        let first = table.insert(row(json!({"kriteria": "Price"})));
        let second = table.insert(row(json!({"kriteria": "Quality"})));

        assert_eq!(first.get("id"), Some(&json!(1)));
        assert_eq!(second.get("id"), Some(&json!(2)));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut table = TableData::default();
        table.insert(row(json!({"kriteria": "Price"})));
        table.delete(&RowFilter::neq("id", 0));

        let again = table.insert(row(json!({"kriteria": "Price"})));
        assert_eq!(again.get("id"), Some(&json!(2)));
    }

    #[test]
    fn explicit_id_advances_sequence() {
        let mut table = TableData::default();
        table.insert(row(json!({"id": 10, "kriteria": "Price"})));
        let next = table.insert(row(json!({"kriteria": "Quality"})));
        assert_eq!(next.get("id"), Some(&json!(11)));
    }

    #[test]
    fn select_orders_by_column() {
        let mut table = TableData::default();
        table.insert(row(json!({"id": 3, "name": "c"})));
        table.insert(row(json!({"id": 1, "name": "a"})));
        table.insert(row(json!({"id": 2, "name": "b"})));

        let names: Vec<Value> = table
            .select(&SelectQuery::ordered_by("id"))
            .into_iter()
            .map(|r| r["name"].clone())
            .collect();
        assert_eq!(names, vec![json!("a"), json!("b"), json!("c")]);
    }

    #[test]
    fn update_merges_changes_into_matching_rows() {
        let mut table = TableData::default();
        table.insert(row(json!({"Alternatif": "Beska", "k1": 200.0})));
        table.insert(row(json!({"Alternatif": "Fow", "k1": 210.0})));

        let changed = table.update(&RowFilter::eq("Alternatif", "Fow"), &row(json!({"k1": 190.0})));

        assert_eq!(changed, 1);
        assert_eq!(table.rows[1]["k1"], json!(190.0));
        assert_eq!(table.rows[0]["k1"], json!(200.0));
    }

    #[test]
    fn missing_sort_values_go_last() {
        assert_eq!(compare_values(None, Some(&json!(1))), Ordering::Greater);
        assert_eq!(compare_values(Some(&json!(null)), Some(&json!(1))), Ordering::Greater);
        assert_eq!(compare_values(Some(&json!(2)), Some(&json!(10))), Ordering::Less);
    }
}
