//! Query engine client
//!
//! [`QueryEngineClient`] runs every operation as one sequential chain of
//! backend calls. [`QueryEngineClient::execute_query`] is the shared
//! primitive: submit, poll until the job leaves the in-flight states, then
//! fetch one bounded page of rows. Schema, preview and explain build SQL on
//! top of it.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, info, instrument, warn};

use super::api::{DremioApi, HttpDremioApi};
use super::error::{DremioError, DremioResult};
use super::sql::{ensure_select, table_reference};
use super::types::{
    CatalogEntity, CatalogResponse, ExplainResult, JobState, JobStatus, QueryResult, SchemaField,
};
use crate::config::{Config, QuerySettings};

/// Rows returned by [`QueryEngineClient::preview_table`]
pub const PREVIEW_ROWS: u32 = 10;

/// Read-only client for catalog, schema, query, preview, search and explain
#[derive(Clone)]
pub struct QueryEngineClient {
    api: Arc<dyn DremioApi>,
    settings: QuerySettings,
}

impl QueryEngineClient {
    pub fn new(api: Arc<dyn DremioApi>, settings: QuerySettings) -> Self {
        Self { api, settings }
    }

    /// Build an HTTP-backed client from loaded configuration
    pub fn from_config(config: &Config) -> DremioResult<Self> {
        let api = HttpDremioApi::new(&config.dremio)?;
        info!("Dremio base URL: {}", api.display_url());
        Ok(Self::new(Arc::new(api), config.query.clone()))
    }

    pub fn settings(&self) -> &QuerySettings {
        &self.settings
    }

    // ========================================================================
    // Query execution
    // ========================================================================

    /// Run `sql` as a job and return at most `max_rows` rows
    ///
    /// The row limit falls back to the configured default and is clamped to
    /// the backend page cap. No statement check is made here; callers that
    /// accept user SQL go through [`Self::run_query`].
    #[instrument(skip(self, sql), fields(sql_len = sql.len()))]
    pub async fn execute_query(&self, sql: &str, max_rows: Option<u32>) -> DremioResult<QueryResult> {
        let limit = self.settings.clamp_rows(max_rows);

        let job_id = self.api.submit_sql(sql).await?;
        debug!(%job_id, "job submitted");

        let status = self.wait_for_job(&job_id).await?;
        match status.job_state {
            JobState::Completed => {}
            state => {
                warn!(%job_id, %state, "job did not complete");
                return Err(DremioError::JobFailed {
                    job_id,
                    state,
                    message: status
                        .error_message
                        .unwrap_or_else(|| "no error message reported".to_string()),
                    detail: status.cancellation_reason,
                });
            }
        }

        let mut result = self.api.job_results(&job_id, limit).await?;
        result.rows.truncate(limit as usize);
        debug!(%job_id, rows = result.rows.len(), row_count = result.row_count, "results fetched");
        Ok(result)
    }

    /// Poll until the job is terminal or the attempt ceiling is reached
    async fn wait_for_job(&self, job_id: &str) -> DremioResult<JobStatus> {
        let mut status = self.api.job_status(job_id).await?;
        let mut attempts = 0;

        while !status.job_state.is_terminal() {
            if attempts >= self.settings.max_poll_attempts {
                warn!(%job_id, attempts, state = %status.job_state, "job polling timed out");
                return Err(DremioError::Timeout {
                    job_id: job_id.to_string(),
                    attempts,
                });
            }

            tokio::time::sleep(self.settings.poll_interval()).await;
            status = self.api.job_status(job_id).await?;
            attempts += 1;
            debug!(%job_id, attempts, state = %status.job_state, "polled job");
        }

        Ok(status)
    }

    /// Run a user-supplied statement; anything but SELECT is rejected
    pub async fn run_query(&self, sql: &str, max_rows: Option<u32>) -> DremioResult<QueryResult> {
        ensure_select(sql)?;
        self.execute_query(sql, max_rows).await
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    /// Raw catalog JSON for `path`, or the root listing
    pub async fn get_catalog(&self, path: Option<&[String]>) -> DremioResult<Value> {
        self.api.catalog(path.unwrap_or_default()).await
    }

    /// Entities whose last path segment contains `term`, ignoring case
    ///
    /// Walks the root catalog depth-first in response order. Entities without
    /// a path are skipped.
    #[instrument(skip(self))]
    pub async fn search_catalog(&self, term: &str) -> DremioResult<Vec<CatalogEntity>> {
        if term.trim().is_empty() {
            return Err(DremioError::EmptySearchTerm);
        }
        let needle = term.to_lowercase();

        let raw = self.api.catalog(&[]).await?;
        let response: CatalogResponse =
            serde_json::from_value(raw).map_err(|source| DremioError::Decode {
                context: "root catalog".to_string(),
                source,
            })?;

        let matches = search_entities(&response.into_roots(), &needle);
        debug!(matches = matches.len(), "catalog search finished");
        Ok(matches)
    }

    // ========================================================================
    // Tables
    // ========================================================================

    /// Column names and types of a table, read from a zero-row query
    pub async fn get_table_schema(&self, path: &[String]) -> DremioResult<Vec<SchemaField>> {
        let sql = format!("SELECT * FROM {} LIMIT 0", table_reference(path)?);
        Ok(self.execute_query(&sql, Some(0)).await?.schema)
    }

    /// First ten rows of a table
    pub async fn preview_table(&self, path: &[String]) -> DremioResult<QueryResult> {
        let sql = format!(
            "SELECT * FROM {} LIMIT {}",
            table_reference(path)?,
            PREVIEW_ROWS
        );
        self.execute_query(&sql, Some(PREVIEW_ROWS)).await
    }

    // ========================================================================
    // Explain
    // ========================================================================

    /// Execution plan of a SELECT statement as one text block
    pub async fn explain_query(&self, sql: &str) -> DremioResult<ExplainResult> {
        ensure_select(sql)?;
        let result = self
            .execute_query(&format!("EXPLAIN PLAN FOR {}", sql), None)
            .await?;
        Ok(ExplainResult {
            text: flatten_rows(&result),
        })
    }
}

/// Depth-first, pre-order walk collecting name matches
///
/// Matches are cloned whole, children included.
fn search_entities(roots: &[CatalogEntity], needle: &str) -> Vec<CatalogEntity> {
    let mut matches = Vec::new();
    let mut stack: Vec<&CatalogEntity> = roots.iter().rev().collect();

    while let Some(entity) = stack.pop() {
        if let Some(children) = &entity.children {
            stack.extend(children.iter().rev());
        }
        let hit = entity
            .name()
            .is_some_and(|name| name.to_lowercase().contains(needle));
        if hit {
            matches.push(entity.clone());
        }
    }

    matches
}

/// One line per row, values separated by a single space
///
/// Values follow the column order of the schema; rows carrying columns not in
/// the schema fall back to their own key order.
fn flatten_rows(result: &QueryResult) -> String {
    result
        .rows
        .iter()
        .map(|row| row_values(row, &result.schema).join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

fn row_values(row: &Map<String, Value>, schema: &[SchemaField]) -> Vec<String> {
    if schema.is_empty() || schema.iter().any(|f| !row.contains_key(&f.name)) {
        return row.values().map(value_text).collect();
    }
    schema
        .iter()
        .filter_map(|field| row.get(&field.name))
        .map(value_text)
        .collect()
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
