//! SMART normalizer - direction-aware min-max scaling of raw ratings.

use serde::{Deserialize, Serialize};

use super::{AlternativeScoreTable, CriteriaSet, CriterionDirection};

/// Utility given to every row of a column with no spread.
pub const NO_VARIANCE_UTILITY: f64 = 1.0;

/// Normalized utilities of one alternative, in criteria order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRow {
    pub alternative: String,
    pub values: Vec<f64>,
}

/// Utilities in `[0, 1]` for every alternative and criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTable {
    criteria: CriteriaSet,
    rows: Vec<NormalizedRow>,
}

impl NormalizedTable {
    pub fn criteria(&self) -> &CriteriaSet {
        &self.criteria
    }

    pub fn rows(&self) -> &[NormalizedRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Utility of the alternative at `row` for the named criterion.
    pub fn get(&self, row: usize, criterion: &str) -> Option<f64> {
        let col = self.criteria.index_of(criterion)?;
        self.rows.get(row).and_then(|r| r.values.get(col)).copied()
    }
}

/// SMART normalization.
pub struct SmartNormalizer;

impl SmartNormalizer {
    /// Normalizes every column of the table according to its direction.
    pub fn normalize(table: &AlternativeScoreTable) -> NormalizedTable {
        let criteria = table.criteria().clone();

        let columns: Vec<Vec<f64>> = criteria
            .iter()
            .enumerate()
            .map(|(idx, criterion)| Self::normalize_column(&table.column(idx), criterion.direction()))
            .collect();

        let rows = table
            .rows()
            .iter()
            .enumerate()
            .map(|(row_idx, row)| NormalizedRow {
                alternative: row.alternative.name().to_string(),
                values: columns.iter().map(|col| col[row_idx]).collect(),
            })
            .collect();

        NormalizedTable { criteria, rows }
    }

    /// Min-max scales one column.
    ///
    /// # Algorithm
    /// - Cost: `(max - v) / (max - min)`
    /// - Benefit: `(v - min) / (max - min)`
    ///
    /// # Edge Cases
    /// - Empty column: returns empty Vec
    /// - `max == min`: every value becomes [`NO_VARIANCE_UTILITY`]
    pub fn normalize_column(values: &[f64], direction: CriterionDirection) -> Vec<f64> {
        if values.is_empty() {
            return Vec::new();
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;

        if range == 0.0 {
            return vec![NO_VARIANCE_UTILITY; values.len()];
        }

        values
            .iter()
            .map(|&v| match direction {
                CriterionDirection::Cost => (max - v) / range,
                CriterionDirection::Benefit => (v - min) / range,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_column_prefers_low_values() {
        let out = SmartNormalizer::normalize_column(&[190.0, 250.0], CriterionDirection::Cost);
        assert_eq!(out, vec![1.0, 0.0]);
    }

    #[test]
    fn benefit_column_prefers_high_values() {
        let out = SmartNormalizer::normalize_column(&[1.0, 5.0], CriterionDirection::Benefit);
        assert_eq!(out, vec![0.0, 1.0]);
    }

    #[test]
    fn middle_values_scale_linearly() {
        let out = SmartNormalizer::normalize_column(&[1.0, 3.0, 5.0], CriterionDirection::Benefit);
        assert_eq!(out, vec![0.0, 0.5, 1.0]);

        let out = SmartNormalizer::normalize_column(&[1.0, 2.0, 3.0], CriterionDirection::Cost);
        assert_eq!(out, vec![1.0, 0.5, 0.0]);
    }

    #[test]
    fn constant_column_is_all_ones_not_nan() {
        for direction in [CriterionDirection::Cost, CriterionDirection::Benefit] {
            let out = SmartNormalizer::normalize_column(&[5.0, 5.0, 5.0], direction);
            assert_eq!(out, vec![1.0, 1.0, 1.0]);
        }
    }

    #[test]
    fn single_alternative_counts_as_no_variance() {
        let out = SmartNormalizer::normalize_column(&[210.0], CriterionDirection::Cost);
        assert_eq!(out, vec![1.0]);
    }

    #[test]
    fn empty_column_stays_empty() {
        assert!(SmartNormalizer::normalize_column(&[], CriterionDirection::Cost).is_empty());
    }

    #[test]
    fn table_normalization_uses_each_criterion_direction() {
        let table = AlternativeScoreTable::new(CriteriaSet::new(["Price", "Quality"]).unwrap())
            .with_row("Beska", vec![190.0, 1.0])
            .unwrap()
            .with_row("Fow", vec![250.0, 5.0])
            .unwrap();

        let normalized = SmartNormalizer::normalize(&table);

        assert_eq!(normalized.rows()[0].alternative, "Beska");
        assert_eq!(normalized.get(0, "Price"), Some(1.0));
        assert_eq!(normalized.get(0, "Quality"), Some(0.0));
        assert_eq!(normalized.get(1, "Price"), Some(0.0));
        assert_eq!(normalized.get(1, "Quality"), Some(1.0));
        assert_eq!(normalized.get(0, "Service"), None);
    }

    #[test]
    fn empty_table_normalizes_to_empty_table() {
        let table = AlternativeScoreTable::new(CriteriaSet::new(["Price"]).unwrap());
        let normalized = SmartNormalizer::normalize(&table);
        assert!(normalized.is_empty());
        assert_eq!(normalized.criteria().len(), 1);
    }

    #[test]
    fn all_utilities_are_in_unit_interval() {
        let table = AlternativeScoreTable::new(CriteriaSet::new(["Harga", "Pelayanan"]).unwrap())
            .with_row("A", vec![231.0, 3.0])
            .unwrap()
            .with_row("B", vec![197.0, 5.0])
            .unwrap()
            .with_row("C", vec![245.0, 1.0])
            .unwrap();

        let normalized = SmartNormalizer::normalize(&table);
        for row in normalized.rows() {
            assert!(row.values.iter().all(|&v| (0.0..=1.0).contains(&v)));
        }
    }
}
