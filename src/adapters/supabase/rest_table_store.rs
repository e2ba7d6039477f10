//! PostgREST table store.
//!
//! Maps the port onto Supabase's REST API:
//!
//! | Port     | HTTP                                         |
//! |----------|----------------------------------------------|
//! | `select` | `GET    /rest/v1/{table}?select=*&order=...` |
//! | `insert` | `POST   /rest/v1/{table}`                    |
//! | `update` | `PATCH  /rest/v1/{table}?{col}=eq.{value}`   |
//! | `delete` | `DELETE /rest/v1/{table}?{col}=neq.{value}`  |
//!
//! Mutations ask for `return=representation` so the affected rows come back.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use tracing::debug;

use super::SupabaseConfig;
use crate::ports::{RowFilter, SelectQuery, StoreError, StoreResult, TableRow, TableStore};

/// Supabase PostgREST implementation of `TableStore`.
pub struct RestTableStore {
    config: SupabaseConfig,
    client: Client,
}

impl RestTableStore {
    pub fn new(config: SupabaseConfig) -> Self {
        let client = config.http_client();
        Self { config, client }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.url, table)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", self.config.api_key())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
    }

    async fn send(&self, table: &str, builder: RequestBuilder) -> StoreResult<Vec<TableRow>> {
        let response = self
            .authorized(builder)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let response = Self::handle_response_status(table, response).await?;

        let body = response
            .text()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        parse_rows(&body)
    }

    /// Maps non-success statuses to store errors.
    async fn handle_response_status(table: &str, response: Response) -> StoreResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(status_error(table, status.as_u16(), &error_body))
    }
}

/// Query-string pairs for a filter.
fn filter_params(filter: &RowFilter) -> Vec<(String, String)> {
    match filter {
        RowFilter::All => Vec::new(),
        RowFilter::Eq(column, value) => vec![(column.clone(), format!("eq.{}", render_value(value)))],
        RowFilter::Neq(column, value) => vec![(column.clone(), format!("neq.{}", render_value(value)))],
    }
}

/// Query-string pairs for a select.
fn select_params(query: &SelectQuery) -> Vec<(String, String)> {
    let mut params = vec![("select".to_string(), "*".to_string())];
    params.extend(filter_params(&query.filter));
    if let Some(column) = &query.order_by {
        params.push(("order".to_string(), format!("{}.asc", column)));
    }
    params
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// PostgREST answers with an array of rows, or an empty body.
fn parse_rows(body: &str) -> StoreResult<Vec<TableRow>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(body).map_err(|e| StoreError::Serialization(e.to_string()))
}

fn status_error(table: &str, status: u16, body: &str) -> StoreError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
        .unwrap_or_else(|| body.to_string());

    match status {
        404 => StoreError::NotFound(table.to_string()),
        408 | 429 | 500..=599 => StoreError::Unavailable(format!("status {}: {}", status, message)),
        _ => StoreError::Rejected { status, message },
    }
}

#[async_trait]
impl TableStore for RestTableStore {
    async fn select(&self, table: &str, query: &SelectQuery) -> StoreResult<Vec<TableRow>> {
        debug!(table, "PostgREST select");
        let builder = self.client.get(self.table_url(table)).query(&select_params(query));
        self.send(table, builder).await
    }

    async fn insert(&self, table: &str, row: TableRow) -> StoreResult<TableRow> {
        debug!(table, "PostgREST insert");
        let builder = self
            .client
            .post(self.table_url(table))
            .header("Prefer", "return=representation")
            .json(&row);

        self.send(table, builder).await?.into_iter().next().ok_or_else(|| {
            StoreError::Serialization("insert returned no representation".to_string())
        })
    }

    async fn update(&self, table: &str, filter: &RowFilter, changes: TableRow) -> StoreResult<usize> {
        debug!(table, ?filter, "PostgREST update");
        let builder = self
            .client
            .patch(self.table_url(table))
            .query(&filter_params(filter))
            .header("Prefer", "return=representation")
            .json(&changes);
        Ok(self.send(table, builder).await?.len())
    }

    async fn delete(&self, table: &str, filter: &RowFilter) -> StoreResult<usize> {
        debug!(table, ?filter, "PostgREST delete");
        let builder = self
            .client
            .delete(self.table_url(table))
            .query(&filter_params(filter))
            .header("Prefer", "return=representation");
        Ok(self.send(table, builder).await?.len())
    }
}
