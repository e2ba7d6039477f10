//! Seed data for an empty workspace: supplier selection for a coffee shop.

use super::{AlternativeScoreTable, CriteriaSet, RatingGenerator};
use crate::domain::foundation::ValidationError;

/// Default criteria in matrix order.
pub const DEFAULT_CRITERIA: [&str; 5] = ["Price", "Quality", "Delivery", "Flexibility", "Service"];

/// Default supplier alternatives.
pub const DEFAULT_SUPPLIERS: [&str; 10] = [
    "Beska",
    "Fow",
    "Gerai Hutan",
    "Pesirah",
    "Benawa",
    "Samping Roastery",
    "Koloni",
    "Agam Pisan",
    "Dialek",
    "Diego",
];

/// The default criteria set.
pub fn default_criteria() -> Result<CriteriaSet, ValidationError> {
    CriteriaSet::new(DEFAULT_CRITERIA)
}

/// The default suppliers rated by a generator seeded with
/// [`DEFAULT_SEED`](super::DEFAULT_SEED).
pub fn sample_score_table() -> Result<AlternativeScoreTable, ValidationError> {
    RatingGenerator::default().generate(default_criteria()?, &DEFAULT_SUPPLIERS)
}
