use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::decision::DecisionWorkspace;
use crate::domain::foundation::AuthenticatedUser;

/// Landing-page summary of the working state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Greeting name of the signed-in user, "User" when it has none
    pub user_display_name: Option<String>,

    pub criteria_count: usize,
    pub alternative_count: usize,

    /// Furthest pipeline stage with a current result
    pub stage: PipelineStage,

    /// Consistency ratio, once weights exist
    pub consistency_ratio: Option<f64>,

    pub status: SystemStatus,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    /// No criteria entered
    Empty,
    /// Criteria and matrix present, weights not computed
    CriteriaDefined,
    WeightsComputed,
    Ranked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemStatus {
    Active,
    /// The store or auth service could not be reached
    Degraded,
}

impl DashboardSummary {
    /// Builds the summary from the workspace as it stands.
    pub fn build(workspace: &DecisionWorkspace, user: Option<&AuthenticatedUser>, status: SystemStatus) -> Self {
        let stage = if workspace.result().is_some() {
            PipelineStage::Ranked
        } else if workspace.weights().is_some() {
            PipelineStage::WeightsComputed
        } else if !workspace.criteria().is_empty() {
            PipelineStage::CriteriaDefined
        } else {
            PipelineStage::Empty
        };

        Self {
            user_display_name: user.map(|u| u.greeting_name().to_string()),
            criteria_count: workspace.criteria().len(),
            alternative_count: workspace.alternative_count(),
            stage,
            consistency_ratio: workspace.consistency().map(|c| c.consistency_ratio),
            status,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;
