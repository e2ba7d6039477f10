//! Test doubles shared by the handler tests.

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::Secret;

use crate::adapters::auth::MockAuthProvider;
use crate::domain::foundation::AuthSession;
use crate::ports::{AuthProvider, RowFilter, SelectQuery, StoreError, StoreResult, TableRow, TableStore};

// ────────────────────────────────────────────────────────────────
// Failing store
// ────────────────────────────────────────────────────────────────

/// Store whose every call fails as unreachable.
pub struct FailingTableStore;

fn unreachable_store() -> StoreError {
    StoreError::Unavailable("connection refused".to_string())
}

#[async_trait]
impl TableStore for FailingTableStore {
    async fn select(&self, _table: &str, _query: &SelectQuery) -> StoreResult<Vec<TableRow>> {
        Err(unreachable_store())
    }

    async fn insert(&self, _table: &str, _row: TableRow) -> StoreResult<TableRow> {
        Err(unreachable_store())
    }

    async fn update(&self, _table: &str, _filter: &RowFilter, _changes: TableRow) -> StoreResult<usize> {
        Err(unreachable_store())
    }

    async fn delete(&self, _table: &str, _filter: &RowFilter) -> StoreResult<usize> {
        Err(unreachable_store())
    }
}

// ────────────────────────────────────────────────────────────────
// Auth
// ────────────────────────────────────────────────────────────────

pub const EMAIL: &str = "owner@kopi.id";
pub const PASSWORD: &str = "rahasia";

/// A provider with one confirmed account, and a live session for it.
pub async fn signed_in() -> (Arc<MockAuthProvider>, AuthSession) {
    let provider = Arc::new(MockAuthProvider::new().with_account(EMAIL, PASSWORD, Some("Rani")));
    let session = provider
        .sign_in(EMAIL, &Secret::new(PASSWORD.to_string()))
        .await
        .unwrap();
    (provider, session)
}
