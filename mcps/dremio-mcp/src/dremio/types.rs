//! Wire and result types for the Dremio v3 REST API

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Jobs
// ============================================================================

/// Lifecycle state of a Dremio job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobState {
    NotSubmitted,
    Starting,
    Running,
    Completed,
    Canceled,
    Failed,
    CancellationRequested,
    Planning,
    Pending,
    MetadataRetrieval,
    Queued,
    EngineStart,
    ExecutionPlanning,
    Enqueued,
    /// A state this client does not know; treated as still running
    #[serde(other)]
    Unknown,
}

impl JobState {
    /// COMPLETED, FAILED and CANCELED end a job; everything else is in flight
    pub fn is_terminal(self) -> bool {
        matches!(self, JobState::Completed | JobState::Failed | JobState::Canceled)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JobState::NotSubmitted => "NOT_SUBMITTED",
            JobState::Starting => "STARTING",
            JobState::Running => "RUNNING",
            JobState::Completed => "COMPLETED",
            JobState::Canceled => "CANCELED",
            JobState::Failed => "FAILED",
            JobState::CancellationRequested => "CANCELLATION_REQUESTED",
            JobState::Planning => "PLANNING",
            JobState::Pending => "PENDING",
            JobState::MetadataRetrieval => "METADATA_RETRIEVAL",
            JobState::Queued => "QUEUED",
            JobState::EngineStart => "ENGINE_START",
            JobState::ExecutionPlanning => "EXECUTION_PLANNING",
            JobState::Enqueued => "ENQUEUED",
            JobState::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response of `POST /api/v3/sql`
#[derive(Debug, Clone, Deserialize)]
pub struct SubmittedJob {
    pub id: String,
}

/// Response of `GET /api/v3/job/{id}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatus {
    pub job_state: JobState,
    #[serde(default)]
    pub row_count: Option<u64>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub cancellation_reason: Option<String>,
}

// ============================================================================
// Query results
// ============================================================================

/// One output column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    #[serde(default)]
    pub name: String,
    /// Type name; Dremio reports either `"INTEGER"` or `{"name": "INTEGER"}`
    #[serde(rename = "type", default, deserialize_with = "type_name")]
    pub field_type: String,
}

fn type_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(name) => name,
        Value::Object(mut fields) => match fields.remove("name") {
            Some(Value::String(name)) => name,
            _ => String::new(),
        },
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// A materialized page of query output
///
/// Also the shape of `GET /api/v3/job/{id}/results`; absent fields decode to
/// zero or empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    #[serde(default)]
    pub row_count: u64,
    #[serde(default)]
    pub schema: Vec<SchemaField>,
    #[serde(default)]
    pub rows: Vec<Map<String, Value>>,
}

/// Flattened textual execution plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplainResult {
    pub text: String,
}

// ============================================================================
// Catalog
// ============================================================================

/// A node of the Dremio catalog: source, space, home, folder or dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntity {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<CatalogEntity>>,
}

impl CatalogEntity {
    /// Last path segment, or `None` when the path is missing or empty
    pub fn name(&self) -> Option<&str> {
        self.path.as_ref()?.last().map(String::as_str)
    }
}

/// The two shapes a catalog lookup can return
///
/// The root listing wraps entities in `{"data": [...]}`; a lookup by path
/// returns one bare entity. An object carrying `data` is always a listing, so
/// a bad entry in it is an error rather than an empty entity.
#[derive(Debug, Clone)]
pub enum CatalogResponse {
    Listing { data: Vec<CatalogEntity> },
    Entity(CatalogEntity),
}

impl<'de> Deserialize<'de> for CatalogResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut value = Value::deserialize(deserializer)?;
        match value.as_object_mut().and_then(|fields| fields.remove("data")) {
            Some(data) => serde_json::from_value(data)
                .map(|data| CatalogResponse::Listing { data })
                .map_err(de::Error::custom),
            None => serde_json::from_value(value)
                .map(CatalogResponse::Entity)
                .map_err(de::Error::custom),
        }
    }
}

impl CatalogResponse {
    /// Top-level entities in response order
    pub fn into_roots(self) -> Vec<CatalogEntity> {
        match self {
            CatalogResponse::Listing { data } => data,
            CatalogResponse::Entity(entity) => vec![entity],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_job_state_parsing() {
        let status: JobStatus =
            serde_json::from_value(json!({ "jobState": "ENQUEUED" })).unwrap();
        assert_eq!(status.job_state, JobState::Enqueued);
        assert!(!status.job_state.is_terminal());

        let status: JobStatus =
            serde_json::from_value(json!({ "jobState": "SOMETHING_NEW" })).unwrap();
        assert_eq!(status.job_state, JobState::Unknown);
        assert!(!status.job_state.is_terminal());
    }

    #[test]
    fn test_terminal_states() {
        assert!(JobState::Completed.is_terminal());
        assert!(JobState::Failed.is_terminal());
        assert!(JobState::Canceled.is_terminal());
        assert!(!JobState::Running.is_terminal());
        assert!(!JobState::Starting.is_terminal());
    }

    #[test]
    fn test_schema_type_shapes() {
        let result: QueryResult = serde_json::from_value(json!({
            "rowCount": 1,
            "schema": [
                { "name": "id", "type": { "name": "BIGINT" } },
                { "name": "label", "type": "VARCHAR" },
                { "name": "odd" }
            ],
            "rows": [{ "id": 1, "label": "a", "odd": null }]
        }))
        .unwrap();

        let types: Vec<&str> = result.schema.iter().map(|f| f.field_type.as_str()).collect();
        assert_eq!(types, vec!["BIGINT", "VARCHAR", ""]);
    }

    #[test]
    fn test_missing_result_fields_default() {
        let result: QueryResult = serde_json::from_value(json!({})).unwrap();
        assert_eq!(result, QueryResult::default());
    }

    #[test]
    fn test_catalog_response_shapes() {
        let listing: CatalogResponse = serde_json::from_value(json!({
            "data": [
                { "id": "1", "path": ["Samples"], "tag": "t", "type": "CONTAINER", "containerType": "SOURCE" },
                { "id": "2", "path": ["@admin"], "type": "CONTAINER", "containerType": "HOME" }
            ]
        }))
        .unwrap();
        assert_eq!(listing.into_roots().len(), 2);

        let entity: CatalogResponse = serde_json::from_value(json!({
            "id": "3",
            "path": ["Samples", "nyc"],
            "entityType": "folder",
            "children": [{ "id": "4", "path": ["Samples", "nyc", "trips"], "type": "DATASET" }]
        }))
        .unwrap();
        let roots = entity.into_roots();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].name(), Some("nyc"));
        assert_eq!(roots[0].children.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_listing_with_bad_entry_is_an_error() {
        let result = serde_json::from_value::<CatalogResponse>(json!({
            "data": [
                { "id": "1", "path": ["sales"] },
                { "id": 2, "path": ["sales_eu"] }
            ]
        }));
        assert!(result.is_err());

        let result = serde_json::from_value::<CatalogResponse>(json!({ "data": "nope" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_entity_name_without_path() {
        let entity = CatalogEntity::default();
        assert_eq!(entity.name(), None);

        let entity = CatalogEntity {
            path: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(entity.name(), None);
    }
}
