//! AHP-SMART decision analysis.
//!
//! The pipeline runs in four pure stages over a [`DecisionWorkspace`]:
//!
//! 1. [`PairwiseMatrix`] - reciprocal comparison matrix over the criteria
//! 2. [`AhpWeightSolver`] - priority weights and consistency report
//! 3. [`SmartNormalizer`] - direction-aware min-max utilities per criterion
//! 4. [`WeightedScorer`] - weighted sum and competition ranking
//!
//! [`records`] flattens the working state into the two persisted tables.

mod ahp_solver;
mod criterion;
pub mod defaults;
mod pairwise_matrix;
mod rating_generator;
pub mod records;
mod score_table;
mod smart_normalizer;
mod weighted_scorer;
mod workspace;

pub use ahp_solver::{
    random_index, AhpOutcome, AhpWeightSolver, AhpWeights, ConsistencyReport, CriterionWeight,
    CONSISTENCY_THRESHOLD,
};
pub use criterion::{CriteriaSet, Criterion, CriterionDirection};
pub use pairwise_matrix::{CellStatus, PairwiseMatrix, NEUTRAL_VALUE};
pub use rating_generator::{
    RatingGenerator, RatingKind, DEFAULT_SEED, DELIVERY_RANGE, LIKERT_SCALE, PRICE_RANGE,
};
pub use records::{AlternativeRecord, CriterionRecord};
pub use score_table::{Alternative, AlternativeScoreTable, RatingRow};
pub use smart_normalizer::{NormalizedRow, NormalizedTable, SmartNormalizer, NO_VARIANCE_UTILITY};
pub use weighted_scorer::{RankedEntry, RankedResult, WeightedScorer};
pub use workspace::{DecisionWorkspace, MatrixEdit};
