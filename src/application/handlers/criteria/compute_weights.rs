//! ComputeWeightsHandler - Solves the workspace matrix for AHP weights.

use tracing::info;

use crate::domain::decision::{ConsistencyReport, CriterionWeight, DecisionWorkspace};
use crate::domain::foundation::DomainError;

/// Decimals shown for weights in the consistency view.
pub const DISPLAY_DECIMALS: u32 = 4;

/// Weights and consistency, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsistencyView {
    /// Weights rounded to four decimals, in criterion order.
    pub weights: Vec<CriterionWeight>,
    pub report: ConsistencyReport,
    /// λmax, CI and CR formatted for display.
    pub summary: String,
}

/// Handler for computing weights. Pure: no ports.
#[derive(Debug, Default)]
pub struct ComputeWeightsHandler;

impl ComputeWeightsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, workspace: &mut DecisionWorkspace) -> Result<ConsistencyView, DomainError> {
        let outcome = workspace.compute_weights()?;
        let report = outcome.consistency;

        info!(
            criteria = outcome.weights.len(),
            lambda_max = report.lambda_max,
            consistency_ratio = report.consistency_ratio,
            consistent = report.consistent,
            "AHP weights computed"
        );

        Ok(ConsistencyView {
            weights: outcome.weights.rounded(DISPLAY_DECIMALS),
            summary: report.summary(),
            report,
        })
    }
}
