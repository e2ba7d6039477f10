//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers mutate the `DecisionWorkspace` or the store; the
//! dashboard query only reads.

pub mod handlers;

pub use handlers::{
    // Auth
    require_auth, RequireAuthHandler, SignInCommand, SignInHandler, SignOutHandler, SignUpCommand,
    SignUpHandler, SignUpResult,
    // Criteria and weights
    ComputeWeightsHandler, ConsistencyView, LoadCriteriaHandler, SaveCriteriaHandler,
    // Alternatives
    GenerateRatingsCommand, GenerateRatingsHandler, LoadAlternativesHandler, SaveAlternativesHandler,
    // Ranking and export
    ComputeRankingHandler, ExportResultsCommand, ExportResultsHandler,
    // Dashboard
    GetDashboardSummaryHandler,
    TableNames,
};
