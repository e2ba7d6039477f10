//! ComputeRankingHandler - Normalizes ratings and ranks the alternatives.

use tracing::info;

use crate::domain::decision::{DecisionWorkspace, RankedResult};
use crate::domain::foundation::DomainError;

/// Handler for ranking. Pure: no ports.
#[derive(Debug, Default)]
pub struct ComputeRankingHandler;

impl ComputeRankingHandler {
    pub fn new() -> Self {
        Self
    }

    /// Runs SMART normalization and the weighted sum over the workspace.
    ///
    /// # Errors
    /// `MissingPrerequisite` before weights or ratings exist.
    pub fn handle(&self, workspace: &mut DecisionWorkspace) -> Result<RankedResult, DomainError> {
        let result = workspace.compute_ranking()?.clone();

        if let Some(top) = result.entries().first() {
            info!(
                alternatives = result.len(),
                leader = %top.alternative,
                score = top.score,
                "Alternatives ranked"
            );
        }
        Ok(result)
    }
}
