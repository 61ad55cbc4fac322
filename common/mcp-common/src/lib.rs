//! MCP Common - Shared utilities for MCP servers
//!
//! This crate provides common functionality used by the MCP servers in this
//! workspace:
//!
//! - **Initialization**: `.env` loading, tracing, and the `serve_stdio!` macro
//! - **Results**: Helper functions for creating `CallToolResult` responses
//! - **Errors**: Conversions that surface failures as `isError` tool results
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{serve_stdio, json_success, ToolResultExt};
//!
//! // In main.rs
//! serve_stdio!("my_mcp", MyServer::from_env());
//!
//! // In tool implementations
//! async fn my_tool(&self) -> McpResult<CallToolResult> {
//!     self.backend.fetch().await.into_json_result()
//! }
//! ```

pub mod error;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use error::{McpResult, ToolResultExt};
pub use init::{init_tracing, load_env_file, load_env_file_from};
pub use result::{json_success, text_error, text_success};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
