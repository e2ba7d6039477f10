//! AHP weight solver - priority weights and consistency from a pairwise matrix.
//!
//! Uses the normalized-column approximation of the principal eigenvector:
//! each column is divided by its sum and the weight of a criterion is the
//! mean of its normalized row.

use serde::{Deserialize, Serialize};

use super::{CriteriaSet, PairwiseMatrix};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Highest consistency ratio still accepted as consistent.
pub const CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Consistency indices smaller than this are floating-point noise.
const CI_TOLERANCE: f64 = 1e-12;

/// Saaty's random index for a matrix of the given size.
///
/// Only tabulated up to 5; larger matrices reuse the value for 5.
pub fn random_index(size: usize) -> f64 {
    match size {
        0..=2 => 0.0,
        3 => 0.58,
        4 => 0.90,
        _ => 1.12,
    }
}

/// The weight derived for one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionWeight {
    pub criterion: String,
    pub weight: f64,
}

/// Priority weights, index-aligned with the criteria order and summing to 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AhpWeights {
    entries: Vec<CriterionWeight>,
}

impl AhpWeights {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CriterionWeight> {
        self.entries.iter()
    }

    /// Weight of the named criterion.
    pub fn get(&self, criterion: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.criterion == criterion)
            .map(|e| e.weight)
    }

    /// Weights in criteria order.
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.weight).collect()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.weight).sum()
    }

    /// Weights rounded for display.
    pub fn rounded(&self, decimals: u32) -> Vec<CriterionWeight> {
        let factor = 10f64.powi(decimals as i32);
        self.entries
            .iter()
            .map(|e| CriterionWeight {
                criterion: e.criterion.clone(),
                weight: (e.weight * factor).round() / factor,
            })
            .collect()
    }
}

/// λmax, consistency index and consistency ratio of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub consistency_ratio: f64,
    pub consistent: bool,
}

impl ConsistencyReport {
    /// Report for matrices too small to be inconsistent.
    pub fn trivial(size: usize) -> Self {
        Self {
            lambda_max: size as f64,
            consistency_index: 0.0,
            consistency_ratio: 0.0,
            consistent: true,
        }
    }

    /// One-line summary with four decimals.
    pub fn summary(&self) -> String {
        format!(
            "λmax = {:.4}, CI = {:.4}, CR = {:.4} ({})",
            self.lambda_max,
            self.consistency_index,
            self.consistency_ratio,
            if self.consistent { "consistent" } else { "inconsistent" }
        )
    }
}

/// Weights and consistency produced together from one matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpOutcome {
    pub weights: AhpWeights,
    pub consistency: ConsistencyReport,
}

/// AHP computations.
pub struct AhpWeightSolver;

impl AhpWeightSolver {
    /// Derives named weights and the consistency report.
    ///
    /// # Errors
    /// `CriterionMismatch` if the matrix size differs from the criteria count.
    pub fn solve(criteria: &CriteriaSet, matrix: &PairwiseMatrix) -> Result<AhpOutcome, DomainError> {
        if criteria.len() != matrix.size() {
            return Err(DomainError::new(
                ErrorCode::CriterionMismatch,
                format!(
                    "Pairwise matrix is {}x{} but there are {} criteria",
                    matrix.size(),
                    matrix.size(),
                    criteria.len()
                ),
            ));
        }

        let priorities = Self::priority_vector(matrix);
        let consistency = Self::consistency(matrix, &priorities);

        let entries = criteria
            .iter()
            .zip(priorities)
            .map(|(c, weight)| CriterionWeight {
                criterion: c.name().to_string(),
                weight,
            })
            .collect();

        Ok(AhpOutcome {
            weights: AhpWeights { entries },
            consistency,
        })
    }

    /// Mean of each row of the column-normalized matrix.
    pub fn priority_vector(matrix: &PairwiseMatrix) -> Vec<f64> {
        let n = matrix.size();
        if n == 0 {
            return Vec::new();
        }

        let rows = matrix.rows();
        let column_sums: Vec<f64> = (0..n)
            .map(|j| rows.iter().map(|row| row[j]).sum())
            .collect();

        rows.iter()
            .map(|row| {
                let normalized_sum: f64 = row
                    .iter()
                    .zip(&column_sums)
                    .map(|(value, sum)| value / sum)
                    .sum();
                normalized_sum / n as f64
            })
            .collect()
    }

    /// Consistency of `matrix` against the given priority vector.
    ///
    /// λmax is the sum of the entries of `M · w`. Matrices with fewer than
    /// two criteria report CR = 0. Where the random index is zero the ratio
    /// is 0 for a perfectly consistent matrix and infinite otherwise.
    pub fn consistency(matrix: &PairwiseMatrix, weights: &[f64]) -> ConsistencyReport {
        let n = matrix.size();
        if n <= 1 {
            return ConsistencyReport::trivial(n);
        }

        let lambda_max: f64 = matrix
            .rows()
            .iter()
            .map(|row| row.iter().zip(weights).map(|(m, w)| m * w).sum::<f64>())
            .sum();

        let mut consistency_index = (lambda_max - n as f64) / (n as f64 - 1.0);
        if consistency_index.abs() < CI_TOLERANCE {
            consistency_index = 0.0;
        }

        let ri = random_index(n);
        let consistency_ratio = if ri == 0.0 {
            if consistency_index == 0.0 {
                0.0
            } else {
                f64::INFINITY
            }
        } else {
            consistency_index / ri
        };

        ConsistencyReport {
            lambda_max,
            consistency_index,
            consistency_ratio,
            consistent: consistency_ratio <= CONSISTENCY_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn criteria(names: &[&str]) -> CriteriaSet {
        CriteriaSet::new(names.iter().copied()).unwrap()
    }

    fn matrix_from(values: &[&[f64]]) -> PairwiseMatrix {
        let rows: Vec<Vec<Option<f64>>> = values
            .iter()
            .map(|row| row.iter().map(|v| Some(*v)).collect())
            .collect();
        PairwiseMatrix::from_rows(&rows)
    }

    #[test]
    fn random_index_table() {
        assert_eq!(random_index(1), 0.0);
        assert_eq!(random_index(2), 0.0);
        assert_eq!(random_index(3), 0.58);
        assert_eq!(random_index(4), 0.90);
        assert_eq!(random_index(5), 1.12);
        assert_eq!(random_index(9), 1.12);
    }

    #[test]
    fn consistent_matrix_yields_geometric_weights() {
        let matrix = matrix_from(&[&[1.0, 2.0, 4.0], &[0.5, 1.0, 2.0], &[0.25, 0.5, 1.0]]);
        let outcome = AhpWeightSolver::solve(&criteria(&["A", "B", "C"]), &matrix).unwrap();

        let w = outcome.weights.values();
        assert!((w[0] - 4.0 / 7.0).abs() < 1e-9);
        assert!((w[1] - 2.0 / 7.0).abs() < 1e-9);
        assert!((w[2] - 1.0 / 7.0).abs() < 1e-9);
        assert!(outcome.consistency.consistency_ratio.abs() < 1e-9);
        assert!(outcome.consistency.consistent);
        assert!((outcome.consistency.lambda_max - 3.0).abs() < 1e-9);
    }

    #[test]
    fn weights_are_named_after_criteria() {
        let matrix = matrix_from(&[&[1.0, 3.0], &[0.0, 1.0]]);
        let outcome = AhpWeightSolver::solve(&criteria(&["Price", "Quality"]), &matrix).unwrap();

        assert!((outcome.weights.get("Price").unwrap() - 0.75).abs() < 1e-12);
        assert!((outcome.weights.get("Quality").unwrap() - 0.25).abs() < 1e-12);
        assert_eq!(outcome.weights.get("Service"), None);
    }

    #[test]
    fn all_ones_matrix_has_zero_ratio_for_every_size() {
        for n in 0..=8 {
            let names: Vec<String> = (0..n).map(|i| format!("C{}", i)).collect();
            let set = CriteriaSet::new(names).unwrap();
            let outcome = AhpWeightSolver::solve(&set, &PairwiseMatrix::new(n)).unwrap();

            assert_eq!(outcome.consistency.consistency_ratio, 0.0, "n = {}", n);
            assert_eq!(outcome.consistency.consistency_index, 0.0, "n = {}", n);
            assert!(outcome.consistency.consistent);
        }
    }

    #[test]
    fn empty_matrix_has_no_weights() {
        let outcome = AhpWeightSolver::solve(&CriteriaSet::empty(), &PairwiseMatrix::new(0)).unwrap();
        assert!(outcome.weights.is_empty());
        assert!(outcome.consistency.consistent);
    }

    #[test]
    fn single_criterion_is_trivially_consistent() {
        let outcome =
            AhpWeightSolver::solve(&criteria(&["Price"]), &PairwiseMatrix::new(1)).unwrap();
        assert_eq!(outcome.weights.values(), vec![1.0]);
        assert_eq!(outcome.consistency.consistency_index, 0.0);
        assert_eq!(outcome.consistency.consistency_ratio, 0.0);
    }

    #[test]
    fn two_criteria_with_conflicting_judgements_are_inconsistent() {
        let matrix = matrix_from(&[&[1.0, 5.0], &[5.0, 1.0]]);
        let outcome = AhpWeightSolver::solve(&criteria(&["A", "B"]), &matrix).unwrap();

        assert!((outcome.consistency.lambda_max - 6.0).abs() < 1e-9);
        assert!((outcome.consistency.consistency_index - 4.0).abs() < 1e-9);
        assert!(outcome.consistency.consistency_ratio.is_infinite());
        assert!(!outcome.consistency.consistent);
    }

    #[test]
    fn reciprocal_pair_is_consistent_with_zero_ratio() {
        let matrix = matrix_from(&[&[1.0, 5.0], &[0.2, 1.0]]);
        let outcome = AhpWeightSolver::solve(&criteria(&["A", "B"]), &matrix).unwrap();

        assert_eq!(outcome.consistency.consistency_index, 0.0);
        assert_eq!(outcome.consistency.consistency_ratio, 0.0);
        assert!(outcome.consistency.consistent);
    }

    #[test]
    fn inconsistent_matrix_is_flagged() {
        // A > B, B > C, but C strongly > A
        let matrix = matrix_from(&[
            &[1.0, 5.0, 1.0 / 7.0],
            &[0.2, 1.0, 5.0],
            &[7.0, 0.2, 1.0],
        ]);
        let outcome = AhpWeightSolver::solve(&criteria(&["A", "B", "C"]), &matrix).unwrap();
        assert!(outcome.consistency.consistency_ratio > CONSISTENCY_THRESHOLD);
        assert!(!outcome.consistency.consistent);
    }

    #[test]
    fn size_mismatch_is_rejected() {
        let result = AhpWeightSolver::solve(&criteria(&["A", "B", "C"]), &PairwiseMatrix::new(2));
        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::CriterionMismatch);
    }

    #[test]
    fn rounded_weights_keep_four_decimals() {
        let matrix = matrix_from(&[&[1.0, 2.0, 4.0], &[0.5, 1.0, 2.0], &[0.25, 0.5, 1.0]]);
        let outcome = AhpWeightSolver::solve(&criteria(&["A", "B", "C"]), &matrix).unwrap();
        let rounded = outcome.weights.rounded(4);
        assert_eq!(rounded[0].weight, 0.5714);
        assert_eq!(rounded[1].weight, 0.2857);
        assert_eq!(rounded[2].weight, 0.1429);
    }

    #[test]
    fn summary_formats_four_decimals() {
        let report = ConsistencyReport::trivial(1);
        assert_eq!(
            report.summary(),
            "λmax = 1.0000, CI = 0.0000, CR = 0.0000 (consistent)"
        );
    }

    #[test]
    fn solving_twice_is_bit_identical() {
        let matrix = matrix_from(&[&[1.0, 3.0, 0.5], &[0.0, 1.0, 2.0], &[0.0, 0.0, 1.0]]);
        let set = criteria(&["A", "B", "C"]);
        let first = AhpWeightSolver::solve(&set, &matrix).unwrap();
        let second = AhpWeightSolver::solve(&set, &matrix).unwrap();
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn reciprocal_matrices_yield_weights_summing_to_one(
            size in 1usize..6,
            judgements in prop::collection::vec(1.0f64 / 9.0..9.0, 15),
        ) {
            let mut matrix = PairwiseMatrix::new(size);
            let mut k = 0;
            for i in 0..size {
                for j in (i + 1)..size {
                    matrix.set_comparison(i, j, judgements[k]).unwrap();
                    k += 1;
                }
            }
            matrix.reconcile_reciprocals();

            let weights = AhpWeightSolver::priority_vector(&matrix);
            let total: f64 = weights.iter().sum();
            prop_assert!((total - 1.0).abs() < 1e-9);
            prop_assert!(weights.iter().all(|&w| w >= 0.0));
        }
    }
}
