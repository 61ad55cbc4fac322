//! Server initialization utilities
//!
//! Provides `.env` loading, standardized tracing setup and the
//! `serve_stdio!` macro for consistent MCP server initialization.

use std::path::{Path, PathBuf};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Load a `.env` file from the working directory or its parents
///
/// Runs before [`init_tracing`] so `RUST_LOG` and `LOG_FORMAT` from the file
/// take effect. Variables already set in the process environment win.
/// Returns the file that was loaded, if any.
pub fn load_env_file() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Load variables from a specific env file; existing variables win
pub fn load_env_file_from(path: &Path) -> anyhow::Result<()> {
    dotenvy::from_path(path)?;
    Ok(())
}

/// Initialize tracing/logging for MCP servers
///
/// Sets up logging to stderr (stdout is reserved for MCP protocol) with:
/// - Formatted output without ANSI colors (for clean logs)
/// - Environment-based filtering via RUST_LOG
/// - Default log level of `info` for the specified crate
///
/// Set `LOG_FORMAT=json` for structured JSON output (useful for production/log aggregation).
/// Default is human-readable text output.
///
/// # Arguments
///
/// * `crate_name` - The name of the MCP server crate (e.g., "dremio_mcp")
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let directive = format!("{}=info", crate_name);
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    Ok(())
}

/// Macro for standardized MCP server initialization
///
/// Expands to a complete `#[tokio::main] async fn main()` that:
/// 1. Loads `.env`, then initializes tracing to stderr
/// 2. Builds the server from the given constructor expression, which must
///    evaluate to `anyhow::Result<Server>`; a failure aborts startup with
///    its diagnostic
/// 3. Serves via stdio transport
/// 4. Waits for shutdown
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::serve_stdio;
/// use my_mcp::MyMcpServer;
///
/// serve_stdio!("my_mcp", MyMcpServer::from_env());
/// ```
#[macro_export]
macro_rules! serve_stdio {
    ($crate_name:expr, $init:expr) => {
        #[tokio::main]
        async fn main() -> anyhow::Result<()> {
            use rmcp::ServiceExt;

            let env_file = $crate::load_env_file();
            $crate::init_tracing($crate_name)?;

            tracing::info!(concat!("Starting ", $crate_name, " MCP Server"));
            if let Some(path) = env_file {
                tracing::info!("Loaded environment from {}", path.display());
            }

            let server = match $init {
                Ok(server) => server,
                Err(e) => {
                    tracing::error!("Startup failed: {:#}", e);
                    return Err(e);
                }
            };
            let service = server.serve(rmcp::transport::stdio()).await?;

            tracing::info!("Server running, waiting for requests...");

            service.waiting().await?;

            tracing::info!("Server shutting down");
            Ok(())
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_env_file_sets_logging_variables() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "MCP_COMMON_TEST_LOG_FORMAT=json").unwrap();
        writeln!(file, "MCP_COMMON_TEST_RUST_LOG=debug").unwrap();

        load_env_file_from(file.path()).unwrap();

        assert_eq!(
            std::env::var("MCP_COMMON_TEST_LOG_FORMAT").as_deref(),
            Ok("json")
        );
        assert_eq!(
            std::env::var("MCP_COMMON_TEST_RUST_LOG").as_deref(),
            Ok("debug")
        );
    }

    #[test]
    fn test_env_file_missing_is_error() {
        assert!(load_env_file_from(Path::new("/nonexistent/.env")).is_err());
    }
}
