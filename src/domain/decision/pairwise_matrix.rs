//! Pairwise comparison matrix over an ordered criteria set.
//!
//! Entry `[i][j]` says how many times more important criterion `i` is than
//! criterion `j`. Non-positive entries mean "not filled in yet" and are
//! completed from their mirror by [`PairwiseMatrix::reconcile_reciprocals`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::ValidationError;

/// Value substituted for cells that cannot be read as a number.
pub const NEUTRAL_VALUE: f64 = 1.0;

/// Outcome of writing one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStatus {
    /// A positive, finite number was stored as given.
    Valid,
    /// Blank or non-positive input; the reciprocal rule will fill the cell.
    Unset,
    /// Unreadable input replaced by [`NEUTRAL_VALUE`].
    Defaulted,
}

/// An n×n reciprocal comparison matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwiseMatrix {
    values: Vec<Vec<f64>>,
    defaulted: BTreeSet<(usize, usize)>,
}

impl PairwiseMatrix {
    /// Creates a fresh matrix of the given size with every entry at 1.
    pub fn new(size: usize) -> Self {
        let mut matrix = Self {
            values: vec![vec![0.0; size]; size],
            defaulted: BTreeSet::new(),
        };
        matrix.reconcile_reciprocals();
        matrix
    }

    /// Builds a matrix from stored rows, then reconciles it.
    ///
    /// The size is the number of rows. Row `i` supplies `[i][j]` from its
    /// `j`-th value; missing or `None` values count as unset.
    pub fn from_rows(rows: &[Vec<Option<f64>>]) -> Self {
        let size = rows.len();
        let mut values = vec![vec![0.0; size]; size];
        for (i, row) in rows.iter().enumerate() {
            for (j, cell) in values[i].iter_mut().enumerate() {
                if let Some(Some(v)) = row.get(j) {
                    if v.is_finite() {
                        *cell = *v;
                    }
                }
            }
        }

        let mut matrix = Self {
            values,
            defaulted: BTreeSet::new(),
        };
        matrix.reconcile_reciprocals();
        matrix
    }

    /// Number of criteria the matrix covers.
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Returns the entry at `[row][col]`.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Row-major view of all entries.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Cells whose last write was replaced by the neutral value.
    pub fn defaulted_cells(&self) -> Vec<(usize, usize)> {
        self.defaulted.iter().copied().collect()
    }

    /// Writes a numeric entry.
    ///
    /// Non-finite numbers are replaced by the neutral value; non-positive
    /// numbers are stored as unset.
    pub fn set_entry(&mut self, row: usize, col: usize, value: f64) -> Result<CellStatus, ValidationError> {
        self.check_index(row, col)?;

        let status = if !value.is_finite() {
            CellStatus::Defaulted
        } else if value > 0.0 {
            CellStatus::Valid
        } else {
            CellStatus::Unset
        };

        self.store(row, col, value, status);
        Ok(status)
    }

    /// Writes an entry typed by the user.
    ///
    /// Blank text leaves the cell unset; text that is not a number is
    /// replaced by the neutral value and reported as `Defaulted`.
    pub fn set_entry_text(&mut self, row: usize, col: usize, text: &str) -> Result<CellStatus, ValidationError> {
        self.check_index(row, col)?;

        let text = text.trim();
        if text.is_empty() {
            self.store(row, col, 0.0, CellStatus::Unset);
            return Ok(CellStatus::Unset);
        }

        match text.parse::<f64>() {
            Ok(value) => self.set_entry(row, col, value),
            Err(_) => {
                self.store(row, col, NEUTRAL_VALUE, CellStatus::Defaulted);
                Ok(CellStatus::Defaulted)
            }
        }
    }

    /// Records a judgement for `[row][col]` and clears its mirror so the
    /// next reconciliation fills in the reciprocal.
    pub fn set_comparison(&mut self, row: usize, col: usize, value: f64) -> Result<CellStatus, ValidationError> {
        let status = self.set_entry(row, col, value)?;
        if row != col && status == CellStatus::Valid {
            self.store(col, row, 0.0, CellStatus::Unset);
        }
        Ok(status)
    }

    /// Applies the reciprocal rule to every pair and forces the diagonal to 1.
    ///
    /// Pairs where both sides are positive are left alone even when they
    /// disagree; inconsistency is diagnosed by the solver, not corrected here.
    pub fn reconcile_reciprocals(&mut self) {
        let n = self.size();
        for i in 0..n {
            self.values[i][i] = 1.0;
            for j in (i + 1)..n {
                let a = self.values[i][j];
                let b = self.values[j][i];

                if a > 0.0 && b <= 0.0 {
                    self.values[j][i] = 1.0 / a;
                } else if b > 0.0 && a <= 0.0 {
                    self.values[i][j] = 1.0 / b;
                } else if a <= 0.0 && b <= 0.0 {
                    self.values[i][j] = 1.0;
                    self.values[j][i] = 1.0;
                }
            }
        }
    }

    /// Discards every entry and rebuilds the matrix at a new size.
    pub fn resize(&mut self, size: usize) {
        *self = Self::new(size);
    }

    /// Formats a cell for display: integral values without a fraction.
    pub fn display_value(&self, row: usize, col: usize) -> Option<String> {
        self.get(row, col).map(format_cell)
    }

    fn store(&mut self, row: usize, col: usize, value: f64, status: CellStatus) {
        self.values[row][col] = match status {
            CellStatus::Defaulted => NEUTRAL_VALUE,
            CellStatus::Unset => 0.0,
            CellStatus::Valid => value,
        };
        if status == CellStatus::Defaulted {
            self.defaulted.insert((row, col));
        } else {
            self.defaulted.remove(&(row, col));
        }
    }

    fn check_index(&self, row: usize, col: usize) -> Result<(), ValidationError> {
        let max = self.size() as i32 - 1;
        if row >= self.size() {
            return Err(ValidationError::out_of_range("row", 0, max, row as i32));
        }
        if col >= self.size() {
            return Err(ValidationError::out_of_range("column", 0, max, col as i32));
        }
        Ok(())
    }
}

impl Default for PairwiseMatrix {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Integral values print without a fractional part, others in shortest form.
fn format_cell(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
