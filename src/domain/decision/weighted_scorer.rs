//! Weighted scorer - combines SMART utilities with AHP weights and ranks.

use serde::{Deserialize, Serialize};

use super::{AhpWeights, NormalizedTable};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Final score and rank of one alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub alternative: String,
    pub score: f64,
    pub rank: u32,
}

/// Ranked alternatives, sorted by descending score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    entries: Vec<RankedEntry>,
}

impl RankedResult {
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries holding rank 1 (more than one on a tie).
    pub fn winners(&self) -> Vec<&RankedEntry> {
        self.entries.iter().filter(|e| e.rank == 1).collect()
    }
}

/// Weighted-sum scoring.
pub struct WeightedScorer;

impl WeightedScorer {
    /// Scores and ranks every alternative.
    ///
    /// Weights are matched to utility columns by criterion name, never by
    /// position.
    ///
    /// # Errors
    /// `CriterionMismatch` if a utility column has no weight or a weight
    /// names a criterion the table does not have.
    pub fn score(table: &NormalizedTable, weights: &AhpWeights) -> Result<RankedResult, DomainError> {
        let column_weights = Self::bind_weights(table, weights)?;

        let scores: Vec<f64> = table
            .rows()
            .iter()
            .map(|row| {
                row.values
                    .iter()
                    .zip(&column_weights)
                    .map(|(utility, weight)| utility * weight)
                    .sum()
            })
            .collect();

        let ranks = Self::competition_ranks(&scores);

        let mut entries: Vec<RankedEntry> = table
            .rows()
            .iter()
            .zip(scores.iter().zip(ranks))
            .map(|(row, (&score, rank))| RankedEntry {
                alternative: row.alternative.clone(),
                score,
                rank,
            })
            .collect();

        // Stable: ties keep alternative order
        entries.sort_by(|a, b| b.score.total_cmp(&a.score));

        Ok(RankedResult { entries })
    }

    /// Standard competition ranking: 1 + number of strictly greater scores.
    ///
    /// Equal scores share the lowest rank; the following rank skips by the
    /// size of the tie (`[0.9, 0.9, 0.4]` ranks as `[1, 1, 3]`).
    pub fn competition_ranks(scores: &[f64]) -> Vec<u32> {
        scores
            .iter()
            .map(|s| 1 + scores.iter().filter(|other| *other > s).count() as u32)
            .collect()
    }

    fn bind_weights(table: &NormalizedTable, weights: &AhpWeights) -> Result<Vec<f64>, DomainError> {
        let mut bound = Vec::with_capacity(table.criteria().len());
        for criterion in table.criteria().iter() {
            let weight = weights.get(criterion.name()).ok_or_else(|| {
                DomainError::new(
                    ErrorCode::CriterionMismatch,
                    format!("No AHP weight for criterion '{}'", criterion.name()),
                )
                .with_detail("criterion", criterion.name())
            })?;
            bound.push(weight);
        }

        if let Some(extra) = weights
            .iter()
            .find(|w| table.criteria().index_of(&w.criterion).is_none())
        {
            return Err(DomainError::new(
                ErrorCode::CriterionMismatch,
                format!("Criterion '{}' has a weight but no ratings", extra.criterion),
            )
            .with_detail("criterion", extra.criterion.clone()));
        }

        Ok(bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::{
        AhpWeightSolver, AlternativeScoreTable, CriteriaSet, PairwiseMatrix, SmartNormalizer,
    };

    fn weights_for(names: &[&str], matrix_rows: &[&[f64]]) -> AhpWeights {
        let rows: Vec<Vec<Option<f64>>> = matrix_rows
            .iter()
            .map(|r| r.iter().map(|v| Some(*v)).collect())
            .collect();
        let criteria = CriteriaSet::new(names.iter().copied()).unwrap();
        AhpWeightSolver::solve(&criteria, &PairwiseMatrix::from_rows(&rows))
            .unwrap()
            .weights
    }

    fn normalized(names: &[&str], rows: &[(&str, Vec<f64>)]) -> NormalizedTable {
        let mut table = AlternativeScoreTable::new(CriteriaSet::new(names.iter().copied()).unwrap());
        for (name, values) in rows {
            table.add_row(*name, values.clone()).unwrap();
        }
        SmartNormalizer::normalize(&table)
    }

    #[test]
    fn score_is_weighted_sum_of_utilities() {
        // Price weight 0.75, Quality 0.25
        let weights = weights_for(&["Price", "Quality"], &[&[1.0, 3.0], &[0.0, 1.0]]);
        let table = normalized(
            &["Price", "Quality"],
            &[("A", vec![190.0, 1.0]), ("B", vec![250.0, 5.0])],
        );

        let result = WeightedScorer::score(&table, &weights).unwrap();

        assert_eq!(result.entries()[0].alternative, "A");
        assert!((result.entries()[0].score - 0.75).abs() < 1e-12);
        assert_eq!(result.entries()[0].rank, 1);
        assert_eq!(result.entries()[1].alternative, "B");
        assert!((result.entries()[1].score - 0.25).abs() < 1e-12);
        assert_eq!(result.entries()[1].rank, 2);
    }

    #[test]
    fn weights_bind_by_name_not_position() {
        // Weights computed with criteria in the opposite order
        let weights = weights_for(&["Quality", "Price"], &[&[1.0, 0.0], &[3.0, 1.0]]);
        let table = normalized(
            &["Price", "Quality"],
            &[("A", vec![190.0, 1.0]), ("B", vec![250.0, 5.0])],
        );

        let result = WeightedScorer::score(&table, &weights).unwrap();
        assert_eq!(result.entries()[0].alternative, "A");
        assert!((result.entries()[0].score - 0.75).abs() < 1e-12);
    }

    #[test]
    fn identical_utilities_tie_and_next_rank_skips() {
        let weights = weights_for(&["Price", "Quality"], &[&[1.0, 1.0], &[1.0, 1.0]]);
        let table = normalized(
            &["Price", "Quality"],
            &[
                ("A", vec![190.0, 5.0]),
                ("B", vec![190.0, 5.0]),
                ("C", vec![250.0, 1.0]),
            ],
        );

        let result = WeightedScorer::score(&table, &weights).unwrap();
        let entries = result.entries();

        assert_eq!(entries[0].score, entries[1].score);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[1].rank, 1);
        assert_eq!(entries[2].alternative, "C");
        assert_eq!(entries[2].rank, 3);
        assert_eq!(result.winners().len(), 2);
    }

    #[test]
    fn ties_keep_alternative_order() {
        let weights = weights_for(&["Quality"], &[&[1.0]]);
        let table = normalized(
            &["Quality"],
            &[("Z", vec![3.0]), ("Y", vec![3.0]), ("X", vec![3.0])],
        );

        let result = WeightedScorer::score(&table, &weights).unwrap();
        let names: Vec<&str> = result.entries().iter().map(|e| e.alternative.as_str()).collect();
        assert_eq!(names, vec!["Z", "Y", "X"]);
        assert!(result.entries().iter().all(|e| e.rank == 1));
    }

    #[test]
    fn competition_ranks_skip_after_ties() {
        assert_eq!(
            WeightedScorer::competition_ranks(&[0.4, 0.9, 0.9, 0.1, 0.4]),
            vec![3, 1, 1, 5, 3]
        );
        assert!(WeightedScorer::competition_ranks(&[]).is_empty());
    }

    #[test]
    fn missing_weight_is_rejected() {
        let weights = weights_for(&["Price"], &[&[1.0]]);
        let table = normalized(&["Price", "Quality"], &[("A", vec![190.0, 1.0])]);

        let err = WeightedScorer::score(&table, &weights).unwrap_err();
        assert_eq!(err.code, ErrorCode::CriterionMismatch);
        assert_eq!(err.details.get("criterion"), Some(&"Quality".to_string()));
    }

    #[test]
    fn extra_weight_is_rejected() {
        let weights = weights_for(&["Price", "Service"], &[&[1.0, 1.0], &[1.0, 1.0]]);
        let table = normalized(&["Price"], &[("A", vec![190.0])]);

        let err = WeightedScorer::score(&table, &weights).unwrap_err();
        assert_eq!(err.code, ErrorCode::CriterionMismatch);
    }

    #[test]
    fn scoring_twice_is_bit_identical() {
        let weights = weights_for(
            &["Price", "Quality", "Delivery"],
            &[&[1.0, 3.0, 5.0], &[0.0, 1.0, 2.0], &[0.0, 0.0, 1.0]],
        );
        let table = normalized(
            &["Price", "Quality", "Delivery"],
            &[
                ("A", vec![231.0, 3.0, 2.0]),
                ("B", vec![197.0, 5.0, 3.0]),
                ("C", vec![245.0, 1.0, 1.0]),
            ],
        );

        let first = WeightedScorer::score(&table, &weights).unwrap();
        let second = WeightedScorer::score(&table, &weights).unwrap();
        assert_eq!(first, second);
        for (a, b) in first.entries().iter().zip(second.entries()) {
            assert_eq!(a.score.to_bits(), b.score.to_bits());
        }
    }
}
