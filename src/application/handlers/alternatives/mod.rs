//! Alternative rating handlers.

mod generate_ratings;
mod load_alternatives;
mod save_alternatives;

pub use generate_ratings::{GenerateRatingsCommand, GenerateRatingsHandler};
pub use load_alternatives::{LoadAlternativesHandler, LoadAlternativesResult};
pub use save_alternatives::{SaveAlternativesHandler, SaveAlternativesResult};

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::adapters::storage::InMemoryTableStore;
    use crate::application::handlers::test_support::{signed_in, FailingTableStore};
    use crate::domain::decision::defaults::{default_criteria, sample_score_table};
    use crate::domain::decision::{AlternativeScoreTable, CriteriaSet, DecisionWorkspace};
    use crate::domain::foundation::ErrorCode;

    const TABLE: &str = "tb_alternatif";

    fn seeded() -> DecisionWorkspace {
        let mut workspace = DecisionWorkspace::with_criteria(default_criteria().unwrap());
        workspace.set_ratings(sample_score_table().unwrap());
        workspace
    }

    #[tokio::test]
    async fn saved_ratings_load_back() {
        let (auth, session) = signed_in().await;
        let store = Arc::new(InMemoryTableStore::new());
        let original = seeded();

        let saved = SaveAlternativesHandler::new(store.clone(), auth.clone(), TABLE)
            .handle(&original, Some(&session))
            .await
            .unwrap();
        assert_eq!(saved.saved, 10);

        let mut restored = DecisionWorkspace::with_criteria(default_criteria().unwrap());
        let loaded = LoadAlternativesHandler::new(store, auth, TABLE)
            .handle(&mut restored, Some(&session))
            .await
            .unwrap();

        assert_eq!(loaded.loaded, 10);
        assert_eq!(restored.ratings(), original.ratings());
    }

    #[tokio::test]
    async fn subset_of_criteria_reads_its_own_columns() {
        let (auth, session) = signed_in().await;
        let store = Arc::new(InMemoryTableStore::new());
        SaveAlternativesHandler::new(store.clone(), auth.clone(), TABLE)
            .handle(&seeded(), Some(&session))
            .await
            .unwrap();

        let mut workspace = DecisionWorkspace::with_criteria(CriteriaSet::new(["Service", "Price"]).unwrap());
        LoadAlternativesHandler::new(store, auth, TABLE)
            .handle(&mut workspace, Some(&session))
            .await
            .unwrap();

        let full = sample_score_table().unwrap();
        let subset = workspace.ratings().unwrap();
        assert_eq!(subset.rows()[0].values, vec![full.rows()[0].values[4], full.rows()[0].values[0]]);
    }

    #[tokio::test]
    async fn loading_without_criteria_fails_fast() {
        let (auth, session) = signed_in().await;
        let mut workspace = DecisionWorkspace::new();

        let err = LoadAlternativesHandler::new(Arc::new(InMemoryTableStore::new()), auth, TABLE)
            .handle(&mut workspace, Some(&session))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::MissingPrerequisite);
    }

    #[tokio::test]
    async fn saving_without_ratings_fails_fast() {
        let (auth, session) = signed_in().await;
        let workspace = DecisionWorkspace::with_criteria(default_criteria().unwrap());

        let err = SaveAlternativesHandler::new(Arc::new(InMemoryTableStore::new()), auth, TABLE)
            .handle(&workspace, Some(&session))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::MissingPrerequisite);
    }

    #[tokio::test]
    async fn unknown_criterion_has_no_column() {
        let (auth, session) = signed_in().await;
        let mut workspace = DecisionWorkspace::with_criteria(CriteriaSet::new(["Sustainability"]).unwrap());
        workspace.set_ratings(AlternativeScoreTable::new(workspace.criteria().clone()));

        let err = SaveAlternativesHandler::new(Arc::new(InMemoryTableStore::new()), auth, TABLE)
            .handle(&workspace, Some(&session))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[tokio::test]
    async fn store_failure_keeps_previous_ratings() {
        let (auth, session) = signed_in().await;
        let mut workspace = seeded();

        let err = LoadAlternativesHandler::new(Arc::new(FailingTableStore), auth, TABLE)
            .handle(&mut workspace, Some(&session))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(workspace.alternative_count(), 10);
    }
}
