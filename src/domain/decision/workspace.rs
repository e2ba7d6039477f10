//! DecisionWorkspace - the working state of one AHP-SMART analysis.
//!
//! Every stage reads its inputs from here and stores its output here.
//! Changing an input clears every derived result that depended on it.

use serde::{Deserialize, Serialize};

use super::{
    AhpOutcome, AhpWeightSolver, AhpWeights, AlternativeScoreTable, CellStatus, CriteriaSet,
    ConsistencyReport, NormalizedTable, PairwiseMatrix, RankedResult, RatingGenerator,
    SmartNormalizer, WeightedScorer,
};
use crate::domain::foundation::{DomainError, ValidationError};

/// One raw-text cell edit of the pairwise matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixEdit {
    pub row: usize,
    pub col: usize,
    pub text: String,
}

impl MatrixEdit {
    pub fn new(row: usize, col: usize, text: impl Into<String>) -> Self {
        Self {
            row,
            col,
            text: text.into(),
        }
    }
}

/// Working state of the analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionWorkspace {
    criteria: CriteriaSet,
    matrix: PairwiseMatrix,
    ahp: Option<AhpOutcome>,
    ratings: Option<AlternativeScoreTable>,
    normalized: Option<NormalizedTable>,
    result: Option<RankedResult>,
}

impl DecisionWorkspace {
    /// Creates an empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a workspace over `criteria` with a fresh all-ones matrix.
    pub fn with_criteria(criteria: CriteriaSet) -> Self {
        let matrix = PairwiseMatrix::new(criteria.len());
        Self {
            criteria,
            matrix,
            ..Self::default()
        }
    }

    // ═══════════════════════════════════════════════════════════════
    // Accessors
    // ═══════════════════════════════════════════════════════════════

    pub fn criteria(&self) -> &CriteriaSet {
        &self.criteria
    }

    pub fn matrix(&self) -> &PairwiseMatrix {
        &self.matrix
    }

    pub fn weights(&self) -> Option<&AhpWeights> {
        self.ahp.as_ref().map(|o| &o.weights)
    }

    pub fn consistency(&self) -> Option<&ConsistencyReport> {
        self.ahp.as_ref().map(|o| &o.consistency)
    }

    pub fn ratings(&self) -> Option<&AlternativeScoreTable> {
        self.ratings.as_ref()
    }

    pub fn normalized(&self) -> Option<&NormalizedTable> {
        self.normalized.as_ref()
    }

    pub fn result(&self) -> Option<&RankedResult> {
        self.result.as_ref()
    }

    /// Number of rated alternatives.
    pub fn alternative_count(&self) -> usize {
        self.ratings.as_ref().map_or(0, |t| t.len())
    }

    // ═══════════════════════════════════════════════════════════════
    // Inputs
    // ═══════════════════════════════════════════════════════════════

    /// Replaces the criteria list.
    ///
    /// The matrix is rebuilt from scratch only when the count changes.
    pub fn set_criteria(&mut self, criteria: CriteriaSet) {
        if criteria.len() != self.matrix.size() {
            self.matrix.resize(criteria.len());
        }
        self.criteria = criteria;
        self.invalidate_weights();
    }

    /// Replaces criteria and matrix together, as loaded from storage.
    pub fn load_criteria(&mut self, criteria: CriteriaSet, matrix: PairwiseMatrix) -> Result<(), ValidationError> {
        if criteria.len() != matrix.size() {
            return Err(ValidationError::out_of_range(
                "matrix",
                criteria.len() as i32,
                criteria.len() as i32,
                matrix.size() as i32,
            ));
        }
        self.criteria = criteria;
        self.matrix = matrix;
        self.invalidate_weights();
        Ok(())
    }

    /// Applies a batch of text edits, then reconciles reciprocals.
    ///
    /// The batch is all-or-nothing: an out-of-range index leaves the
    /// matrix untouched.
    pub fn edit_matrix(&mut self, edits: &[MatrixEdit]) -> Result<Vec<CellStatus>, ValidationError> {
        let mut matrix = self.matrix.clone();
        let statuses = edits
            .iter()
            .map(|edit| matrix.set_entry_text(edit.row, edit.col, &edit.text))
            .collect::<Result<Vec<_>, _>>()?;
        matrix.reconcile_reciprocals();

        self.matrix = matrix;
        self.invalidate_weights();
        Ok(statuses)
    }

    /// Records a numeric judgement and lets reconciliation derive its mirror.
    pub fn set_comparison(&mut self, row: usize, col: usize, value: f64) -> Result<CellStatus, ValidationError> {
        let status = self.matrix.set_comparison(row, col, value)?;
        self.matrix.reconcile_reciprocals();
        self.invalidate_weights();
        Ok(status)
    }

    /// Replaces the rating table.
    pub fn set_ratings(&mut self, ratings: AlternativeScoreTable) {
        self.ratings = Some(ratings);
        self.clear_ranking();
    }

    /// Redraws the price and delivery ratings of every alternative.
    pub fn reroll_price_and_delivery(&mut self, generator: &mut RatingGenerator) -> Result<(), DomainError> {
        self.ratings_mut()?.reroll_price_and_delivery(generator);
        self.clear_ranking();
        Ok(())
    }

    /// Redraws the Likert ratings of every alternative.
    pub fn reroll_likert(&mut self, generator: &mut RatingGenerator) -> Result<(), DomainError> {
        self.ratings_mut()?.reroll_likert(generator);
        self.clear_ranking();
        Ok(())
    }

    fn ratings_mut(&mut self) -> Result<&mut AlternativeScoreTable, DomainError> {
        self.ratings
            .as_mut()
            .ok_or_else(|| DomainError::missing_prerequisite("Enter alternatives before generating ratings"))
    }

    // ═══════════════════════════════════════════════════════════════
    // Stages
    // ═══════════════════════════════════════════════════════════════

    /// Solves the matrix for weights and consistency.
    pub fn compute_weights(&mut self) -> Result<&AhpOutcome, DomainError> {
        let outcome = AhpWeightSolver::solve(&self.criteria, &self.matrix)?;
        self.clear_ranking();
        Ok(self.ahp.insert(outcome))
    }

    /// Normalizes the ratings and ranks the alternatives.
    ///
    /// # Errors
    /// `MissingPrerequisite` before weights are computed or ratings entered;
    /// `CriterionMismatch` when ratings and weights cover different criteria.
    pub fn compute_ranking(&mut self) -> Result<&RankedResult, DomainError> {
        let weights = self
            .ahp
            .as_ref()
            .map(|o| &o.weights)
            .ok_or_else(|| DomainError::missing_prerequisite("Compute AHP weights before ranking"))?;
        let ratings = self
            .ratings
            .as_ref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| DomainError::missing_prerequisite("Enter alternative ratings before ranking"))?;

        let normalized = SmartNormalizer::normalize(ratings);
        let result = WeightedScorer::score(&normalized, weights)?;

        self.normalized = Some(normalized);
        Ok(self.result.insert(result))
    }

    fn invalidate_weights(&mut self) {
        self.ahp = None;
        self.clear_ranking();
    }

    fn clear_ranking(&mut self) {
        self.normalized = None;
        self.result = None;
    }
}
