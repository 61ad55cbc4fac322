//! Error reporting utilities for MCP servers
//!
//! Tool failures are reported to the client as `isError` results carrying a
//! readable message. Only failures of the server itself (for example a
//! response that cannot be serialized) surface as protocol errors.

use std::fmt::Display;

use rmcp::{model::CallToolResult, ErrorData as McpError};
use serde::Serialize;

use crate::result::{json_success, text_error, text_success};

/// Type alias for MCP tool results
pub type McpResult<T> = Result<T, McpError>;

/// Extension trait turning domain results into tool responses
///
/// `Ok` values become success content and `Err` values become an `isError`
/// result whose text is the error's `Display` output.
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::ToolResultExt;
///
/// async fn my_tool(&self) -> McpResult<CallToolResult> {
///     self.client.fetch_rows().await.into_json_result()
/// }
/// ```
pub trait ToolResultExt<T> {
    /// Serialize `Ok` as pretty JSON, report `Err` as a tool error
    fn into_json_result(self) -> McpResult<CallToolResult>
    where
        T: Serialize;

    /// Return `Ok` as plain text, report `Err` as a tool error
    fn into_text_result(self) -> McpResult<CallToolResult>
    where
        T: Into<String>;
}

impl<T, E: Display> ToolResultExt<T> for Result<T, E> {
    fn into_json_result(self) -> McpResult<CallToolResult>
    where
        T: Serialize,
    {
        match self {
            Ok(data) => json_success(&data),
            Err(e) => {
                tracing::warn!(error = %e, "tool call failed");
                Ok(text_error(e.to_string()))
            }
        }
    }

    fn into_text_result(self) -> McpResult<CallToolResult>
    where
        T: Into<String>,
    {
        match self {
            Ok(text) => Ok(text_success(text)),
            Err(e) => {
                tracing::warn!(error = %e, "tool call failed");
                Ok(text_error(e.to_string()))
            }
        }
    }
}
