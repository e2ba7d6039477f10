//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.
//! Handlers that read or write the store resolve the session first and
//! fail with `NotAuthenticated` without one.

pub mod alternatives;
pub mod auth;
pub mod criteria;
pub mod dashboard;
pub mod ranking;
mod table_rows;

#[cfg(test)]
mod test_support;

pub use alternatives::{
    GenerateRatingsCommand, GenerateRatingsHandler, LoadAlternativesHandler, LoadAlternativesResult,
    SaveAlternativesHandler, SaveAlternativesResult,
};
pub use auth::{
    require_auth, RequireAuthHandler, SignInCommand, SignInHandler, SignOutHandler, SignUpCommand,
    SignUpHandler, SignUpResult,
};
pub use criteria::{
    ComputeWeightsHandler, ConsistencyView, LoadCriteriaHandler, LoadCriteriaResult, SaveCriteriaHandler,
    SaveCriteriaResult,
};
pub use dashboard::GetDashboardSummaryHandler;
pub use ranking::{ComputeRankingHandler, ExportResultsCommand, ExportResultsHandler, ExportResultsResult};

/// Names of the two persisted tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNames {
    pub criteria: String,
    pub alternatives: String,
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            criteria: "tb_kriteria".to_string(),
            alternatives: "tb_alternatif".to_string(),
        }
    }
}
