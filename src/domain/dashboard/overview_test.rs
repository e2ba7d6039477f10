#[cfg(test)]
mod tests {
    use crate::domain::dashboard::overview::{DashboardSummary, PipelineStage, SystemStatus};
    use crate::domain::decision::defaults::{default_criteria, sample_score_table};
    use crate::domain::decision::DecisionWorkspace;
    use crate::domain::foundation::{AuthenticatedUser, UserId};

    fn user(display_name: Option<&str>) -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new("user-1").unwrap(),
            "owner@kopi.id",
            display_name.map(String::from),
            true,
        )
    }

    #[test]
    fn test_empty_workspace_summary() {
        let summary = DashboardSummary::build(&DecisionWorkspace::new(), None, SystemStatus::Active);

        assert_eq!(summary.criteria_count, 0);
        assert_eq!(summary.alternative_count, 0);
        assert_eq!(summary.stage, PipelineStage::Empty);
        assert!(summary.user_display_name.is_none());
        assert!(summary.consistency_ratio.is_none());
    }

    #[test]
    fn test_summary_counts_criteria_and_alternatives() {
        let mut ws = DecisionWorkspace::with_criteria(default_criteria().unwrap());
        ws.set_ratings(sample_score_table().unwrap());

        let summary = DashboardSummary::build(&ws, Some(&user(Some("Rani"))), SystemStatus::Active);

        assert_eq!(summary.criteria_count, 5);
        assert_eq!(summary.alternative_count, 10);
        assert_eq!(summary.stage, PipelineStage::CriteriaDefined);
        assert_eq!(summary.user_display_name.as_deref(), Some("Rani"));
    }

    #[test]
    fn test_unnamed_user_is_greeted_generically() {
        let summary = DashboardSummary::build(&DecisionWorkspace::new(), Some(&user(None)), SystemStatus::Active);
        assert_eq!(summary.user_display_name.as_deref(), Some("User"));
    }

    #[test]
    fn test_stage_tracks_pipeline_progress() {
        let mut ws = DecisionWorkspace::with_criteria(default_criteria().unwrap());
        ws.set_ratings(sample_score_table().unwrap());

        ws.compute_weights().unwrap();
        let summary = DashboardSummary::build(&ws, None, SystemStatus::Active);
        assert_eq!(summary.stage, PipelineStage::WeightsComputed);
        assert_eq!(summary.consistency_ratio, Some(0.0));

        ws.compute_ranking().unwrap();
        let summary = DashboardSummary::build(&ws, None, SystemStatus::Degraded);
        assert_eq!(summary.stage, PipelineStage::Ranked);
        assert_eq!(summary.status, SystemStatus::Degraded);
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = DashboardSummary::build(&DecisionWorkspace::new(), None, SystemStatus::Active);
        let json = serde_json::to_string(&summary).unwrap();

        assert!(json.contains("criteriaCount"));
        assert!(json.contains("alternativeCount"));
        assert!(json.contains("\"status\":\"active\""));
    }
}
