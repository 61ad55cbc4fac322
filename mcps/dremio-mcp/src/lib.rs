//! Dremio MCP Library
//!
//! Read-only exploration of a Dremio SQL engine over its v3 REST API:
//! catalog browsing and search, table schema and preview, SELECT queries,
//! and execution plans.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use dremio_mcp::{Config, DremioMcpServer};
//!
//! let config = Config::load()?;
//! let server = DremioMcpServer::from_config(&config)?;
//! // Use with in-memory transport or serve via stdio
//! ```
//!
//! # Configuration
//! Set `DREMIO_URL` and `DREMIO_TOKEN`, or configure in `~/.binks/dremio.toml`.
//! `DREMIO_VERIFY_SSL=false` disables certificate verification.

pub mod config;
pub mod dremio;
pub mod handlers;
pub mod params;
pub mod server;

// Re-export main server type
pub use config::Config;
pub use server::DremioMcpServer;

// Re-export parameter types for direct API usage
pub use params::*;
