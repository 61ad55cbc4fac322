//! Dremio REST client
//!
//! Backend trait and HTTP implementation, the query engine client built on
//! it, SQL text helpers, and error types.

pub mod api;
pub mod client;
pub mod error;
pub mod sql;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use api::{DremioApi, HttpDremioApi};
pub use client::QueryEngineClient;
pub use error::{DremioError, DremioResult};
pub use sql::{is_select_query, quote_identifier, table_reference};
pub use types::{CatalogEntity, ExplainResult, JobState, QueryResult, SchemaField};
