//! Tool parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for browsing the catalog
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct BrowseCatalogParams {
    #[schemars(description = "Catalog path segments, e.g. [\"Samples\", \"samples.dremio.com\"]. Omit to list the catalog root")]
    pub path: Option<Vec<String>>,
}

/// Parameters for reading a table's columns
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TableSchemaParams {
    #[schemars(description = "Table path segments, e.g. [\"Samples\", \"samples.dremio.com\", \"NYC-taxi-trips\"]")]
    pub path: Vec<String>,
}

/// Parameters for running a query
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RunQueryParams {
    #[schemars(description = "SQL SELECT statement to execute. Other statement types are rejected")]
    pub sql: String,

    #[schemars(description = "Maximum rows to return (default: 100, capped at 500)")]
    pub max_rows: Option<u32>,
}

/// Parameters for previewing a table
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PreviewTableParams {
    #[schemars(description = "Table path segments, e.g. [\"Samples\", \"samples.dremio.com\", \"zips.json\"]")]
    pub path: Vec<String>,
}

/// Parameters for searching the catalog
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchCatalogParams {
    #[schemars(description = "Case-insensitive substring matched against entity names")]
    pub term: String,
}

/// Parameters for explaining a query
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExplainQueryParams {
    #[schemars(description = "SQL SELECT statement to explain")]
    pub sql: String,
}
