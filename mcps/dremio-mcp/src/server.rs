//! MCP Server implementation
//!
//! This module defines the main MCP server that exposes read-only Dremio
//! exploration tools. Handler implementations are in the handlers module.

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};

use crate::config::Config;
use crate::dremio::QueryEngineClient;
use crate::handlers;
use crate::params::*;

/// The main Dremio MCP Server
#[derive(Clone)]
pub struct DremioMcpServer {
    client: Arc<QueryEngineClient>,
    tool_router: ToolRouter<Self>,
}

impl DremioMcpServer {
    pub fn new(client: QueryEngineClient) -> Self {
        Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(QueryEngineClient::from_config(config)?))
    }

    /// Load configuration from the environment and build the server
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Config::load()?;
        Self::from_config(&config)
    }
}

// ============================================================================
// Tools
// ============================================================================

#[tool_router]
impl DremioMcpServer {
    #[tool(description = "Browse the Dremio catalog. Without a path, lists top-level sources, spaces and homes; with a path, returns that entity and its children")]
    async fn browse_catalog(
        &self,
        Parameters(params): Parameters<BrowseCatalogParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::browse_catalog(&self.client, params).await
    }

    #[tool(description = "Get the column names and types of a table or view")]
    async fn get_table_schema(
        &self,
        Parameters(params): Parameters<TableSchemaParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_table_schema(&self.client, params).await
    }

    #[tool(description = "Run a read-only SQL SELECT query and return row count, schema and rows as JSON")]
    async fn run_query(
        &self,
        Parameters(params): Parameters<RunQueryParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::run_query(&self.client, params).await
    }

    #[tool(description = "Preview the first 10 rows of a table or view")]
    async fn preview_table(
        &self,
        Parameters(params): Parameters<PreviewTableParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::preview_table(&self.client, params).await
    }

    #[tool(description = "Search top-level catalog entities by name (case-insensitive substring match)")]
    async fn search_catalog(
        &self,
        Parameters(params): Parameters<SearchCatalogParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::search_catalog(&self.client, params).await
    }

    #[tool(description = "Show the execution plan Dremio would use for a SELECT query")]
    async fn explain_query(
        &self,
        Parameters(params): Parameters<ExplainQueryParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::explain_query(&self.client, params).await
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for DremioMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Dremio MCP Server - read-only exploration of a Dremio lakehouse. \
                 Use browse_catalog and search_catalog to find datasets, \
                 get_table_schema and preview_table to inspect them, run_query for \
                 SELECT statements, and explain_query to view execution plans. \
                 Write statements are always rejected."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
