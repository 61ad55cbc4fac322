//! Handler implementations for Dremio MCP tools
//!
//! Each handler delegates to [`QueryEngineClient`] and converts the outcome
//! into a tool result. Client errors become `isError` results.

use mcp_common::{CallToolResult, McpResult, ToolResultExt};
use tracing::info;

use crate::dremio::QueryEngineClient;
use crate::params::*;

pub async fn browse_catalog(
    client: &QueryEngineClient,
    params: BrowseCatalogParams,
) -> McpResult<CallToolResult> {
    info!(path = ?params.path, "browse_catalog");
    client
        .get_catalog(params.path.as_deref())
        .await
        .into_json_result()
}

pub async fn get_table_schema(
    client: &QueryEngineClient,
    params: TableSchemaParams,
) -> McpResult<CallToolResult> {
    info!(path = ?params.path, "get_table_schema");
    client.get_table_schema(&params.path).await.into_json_result()
}

pub async fn run_query(
    client: &QueryEngineClient,
    params: RunQueryParams,
) -> McpResult<CallToolResult> {
    info!(max_rows = ?params.max_rows, "run_query");
    client
        .run_query(&params.sql, params.max_rows)
        .await
        .into_json_result()
}

pub async fn preview_table(
    client: &QueryEngineClient,
    params: PreviewTableParams,
) -> McpResult<CallToolResult> {
    info!(path = ?params.path, "preview_table");
    client.preview_table(&params.path).await.into_json_result()
}

pub async fn search_catalog(
    client: &QueryEngineClient,
    params: SearchCatalogParams,
) -> McpResult<CallToolResult> {
    info!(term = %params.term, "search_catalog");
    client.search_catalog(&params.term).await.into_json_result()
}

pub async fn explain_query(
    client: &QueryEngineClient,
    params: ExplainQueryParams,
) -> McpResult<CallToolResult> {
    info!("explain_query");
    client
        .explain_query(&params.sql)
        .await
        .map(|plan| plan.text)
        .into_text_result()
}
