//! Dashboard query handlers.

mod get_dashboard_summary;

pub use get_dashboard_summary::GetDashboardSummaryHandler;
