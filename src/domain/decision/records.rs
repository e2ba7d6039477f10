//! Flattened table rows for the criteria and alternatives tables.
//!
//! Both tables carry five numeric columns `k1..k5`. For criteria they hold
//! one row of the pairwise matrix; for alternatives they hold the ratings
//! against the five standard criteria.

use serde::{Deserialize, Serialize};

use super::{AlternativeScoreTable, CriteriaSet, PairwiseMatrix};
use crate::domain::foundation::{RowId, ValidationError};

/// Number of `k` columns in both tables.
pub const STORED_COLUMNS: usize = 5;

/// One row of the criteria table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RowId>,
    pub kriteria: String,
    #[serde(default)]
    pub k1: Option<f64>,
    #[serde(default)]
    pub k2: Option<f64>,
    #[serde(default)]
    pub k3: Option<f64>,
    #[serde(default)]
    pub k4: Option<f64>,
    #[serde(default)]
    pub k5: Option<f64>,
}

/// One row of the alternatives table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RowId>,
    #[serde(rename = "Alternatif")]
    pub alternatif: String,
    #[serde(default)]
    pub k1: Option<f64>,
    #[serde(default)]
    pub k2: Option<f64>,
    #[serde(default)]
    pub k3: Option<f64>,
    #[serde(default)]
    pub k4: Option<f64>,
    #[serde(default)]
    pub k5: Option<f64>,
}

macro_rules! k_columns {
    ($record:ty) => {
        impl $record {
            /// The `k1..k5` values in column order.
            pub fn columns(&self) -> [Option<f64>; STORED_COLUMNS] {
                [self.k1, self.k2, self.k3, self.k4, self.k5]
            }

            fn set_columns(&mut self, values: [Option<f64>; STORED_COLUMNS]) {
                let [k1, k2, k3, k4, k5] = values;
                self.k1 = k1;
                self.k2 = k2;
                self.k3 = k3;
                self.k4 = k4;
                self.k5 = k5;
            }
        }
    };
}

k_columns!(CriterionRecord);
k_columns!(AlternativeRecord);

fn too_many_criteria(count: usize) -> ValidationError {
    ValidationError::out_of_range("criteria", 0, STORED_COLUMNS as i32, count as i32)
}

impl CriterionRecord {
    /// Flattens criteria and matrix into one record per criterion.
    ///
    /// Columns past the matrix size are written as 0.
    pub fn from_workspace(criteria: &CriteriaSet, matrix: &PairwiseMatrix) -> Result<Vec<Self>, ValidationError> {
        if criteria.len() > STORED_COLUMNS {
            return Err(too_many_criteria(criteria.len()));
        }
        if criteria.len() != matrix.size() {
            return Err(ValidationError::out_of_range(
                "matrix",
                criteria.len() as i32,
                criteria.len() as i32,
                matrix.size() as i32,
            ));
        }

        Ok(criteria
            .iter()
            .enumerate()
            .map(|(i, criterion)| {
                let mut values = [Some(0.0); STORED_COLUMNS];
                for (j, slot) in values.iter_mut().enumerate().take(matrix.size()) {
                    *slot = matrix.get(i, j);
                }
                let mut record = Self {
                    id: None,
                    kriteria: criterion.name().to_string(),
                    k1: None,
                    k2: None,
                    k3: None,
                    k4: None,
                    k5: None,
                };
                record.set_columns(values);
                record
            })
            .collect())
    }

    /// Rebuilds the criteria set and reconciled matrix from stored rows.
    pub fn into_workspace(records: &[Self]) -> Result<(CriteriaSet, PairwiseMatrix), ValidationError> {
        if records.len() > STORED_COLUMNS {
            return Err(too_many_criteria(records.len()));
        }

        let criteria = CriteriaSet::new(records.iter().map(|r| r.kriteria.clone()))?;
        let rows: Vec<Vec<Option<f64>>> = records.iter().map(|r| r.columns().to_vec()).collect();

        Ok((criteria, PairwiseMatrix::from_rows(&rows)))
    }
}

/// Maps a criterion name to its rating column in the alternatives table.
///
/// Recognises the English and Indonesian labels, case-insensitively.
pub fn rating_column(criterion: &str) -> Option<usize> {
    match criterion.trim().to_lowercase().as_str() {
        "price" | "harga" => Some(0),
        "quality" | "kualitas" => Some(1),
        "delivery" | "delivery time" | "delivery-time" | "pengiriman" => Some(2),
        "flexibility" | "fleksibilitas" => Some(3),
        "service" | "pelayanan" => Some(4),
        _ => None,
    }
}

fn bind_columns(criteria: &CriteriaSet) -> Result<Vec<usize>, ValidationError> {
    let mut bound: Vec<usize> = Vec::with_capacity(criteria.len());
    for criterion in criteria.iter() {
        let column = rating_column(criterion.name()).ok_or_else(|| {
            ValidationError::invalid_format(
                "kriteria",
                format!("no rating column for criterion '{}'", criterion.name()),
            )
        })?;
        if bound.contains(&column) {
            return Err(ValidationError::duplicate(
                format!("k{}", column + 1),
                criterion.name(),
            ));
        }
        bound.push(column);
    }
    Ok(bound)
}

impl AlternativeRecord {
    /// Flattens a score table, one record per alternative.
    ///
    /// Rating columns with no matching criterion are left empty.
    pub fn from_table(table: &AlternativeScoreTable) -> Result<Vec<Self>, ValidationError> {
        let columns = bind_columns(table.criteria())?;

        Ok(table
            .rows()
            .iter()
            .map(|row| {
                let mut values = [None; STORED_COLUMNS];
                for (value, &column) in row.values.iter().zip(&columns) {
                    values[column] = Some(*value);
                }
                let mut record = Self {
                    id: None,
                    alternatif: row.alternative.name().to_string(),
                    k1: None,
                    k2: None,
                    k3: None,
                    k4: None,
                    k5: None,
                };
                record.set_columns(values);
                record
            })
            .collect())
    }

    /// Rebuilds a score table over `criteria` from stored rows.
    ///
    /// Every criterion must have a rating column and every row a value in it.
    pub fn into_table(records: &[Self], criteria: &CriteriaSet) -> Result<AlternativeScoreTable, ValidationError> {
        let columns = bind_columns(criteria)?;
        let mut table = AlternativeScoreTable::new(criteria.clone());

        for record in records {
            let stored = record.columns();
            let values = columns
                .iter()
                .map(|&column| stored[column].ok_or_else(|| ValidationError::empty_field(format!("k{}", column + 1))))
                .collect::<Result<Vec<f64>, _>>()?;
            table.add_row(record.alternatif.clone(), values)?;
        }

        Ok(table)
    }
}
