//! Ranking and export handlers.

mod compute_ranking;
mod export_results;

pub use compute_ranking::ComputeRankingHandler;
pub use export_results::{ExportResultsCommand, ExportResultsHandler, ExportResultsResult};
