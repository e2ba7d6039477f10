//! Criteria and pairwise-matrix handlers.

mod compute_weights;
mod load_criteria;
mod save_criteria;

pub use compute_weights::{ComputeWeightsHandler, ConsistencyView, DISPLAY_DECIMALS};
pub use load_criteria::{LoadCriteriaHandler, LoadCriteriaResult};
pub use save_criteria::{SaveCriteriaHandler, SaveCriteriaResult};
