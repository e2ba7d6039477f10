pub mod overview;

pub use overview::{DashboardSummary, PipelineStage, SystemStatus};
