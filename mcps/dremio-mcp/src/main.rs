//! Dremio MCP Server
//!
//! Read-only tools for exploring a Dremio SQL engine.
//!
//! # Configuration
//! Set `DREMIO_URL` and `DREMIO_TOKEN`, or configure in `~/.binks/dremio.toml`.

use dremio_mcp::DremioMcpServer;

mcp_common::serve_stdio!("dremio_mcp", DremioMcpServer::from_env());
