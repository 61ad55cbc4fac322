//! In-memory [`DremioApi`] used by unit tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::api::DremioApi;
use super::error::{DremioError, DremioResult};
use super::types::{JobState, JobStatus, QueryResult};

/// Scripted backend: job statuses are served in order and the last one
/// repeats; every call is recorded
pub struct FakeDremio {
    statuses: Vec<Value>,
    results: Value,
    catalog: Value,
    status_calls: AtomicUsize,
    submitted: Mutex<Vec<String>>,
    result_limits: Mutex<Vec<u32>>,
    catalog_paths: Mutex<Vec<Vec<String>>>,
}

impl FakeDremio {
    pub fn new() -> Self {
        Self {
            statuses: vec![json!({ "jobState": "COMPLETED" })],
            results: json!({ "rowCount": 0, "schema": [], "rows": [] }),
            catalog: json!({ "data": [] }),
            status_calls: AtomicUsize::new(0),
            submitted: Mutex::new(Vec::new()),
            result_limits: Mutex::new(Vec::new()),
            catalog_paths: Mutex::new(Vec::new()),
        }
    }

    pub fn with_states(mut self, states: &[JobState]) -> Self {
        self.statuses = states
            .iter()
            .map(|state| json!({ "jobState": state }))
            .collect();
        self
    }

    pub fn with_status(mut self, status: Value) -> Self {
        self.statuses = vec![status];
        self
    }

    pub fn with_results(mut self, results: Value) -> Self {
        self.results = results;
        self
    }

    pub fn with_catalog(mut self, catalog: Value) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }

    pub fn submitted(&self) -> Vec<String> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn result_limits(&self) -> Vec<u32> {
        self.result_limits.lock().unwrap().clone()
    }

    pub fn catalog_paths(&self) -> Vec<Vec<String>> {
        self.catalog_paths.lock().unwrap().clone()
    }

    pub fn total_calls(&self) -> usize {
        self.status_calls()
            + self.submitted.lock().unwrap().len()
            + self.result_limits.lock().unwrap().len()
            + self.catalog_paths.lock().unwrap().len()
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: &Value) -> DremioResult<T> {
    serde_json::from_value(value.clone()).map_err(|source| DremioError::Decode {
        context: "fake response".to_string(),
        source,
    })
}

#[async_trait]
impl DremioApi for FakeDremio {
    async fn catalog(&self, path: &[String]) -> DremioResult<Value> {
        self.catalog_paths.lock().unwrap().push(path.to_vec());
        Ok(self.catalog.clone())
    }

    async fn submit_sql(&self, sql: &str) -> DremioResult<String> {
        let mut submitted = self.submitted.lock().unwrap();
        submitted.push(sql.to_string());
        Ok(format!("job-{}", submitted.len()))
    }

    async fn job_status(&self, _job_id: &str) -> DremioResult<JobStatus> {
        let call = self.status_calls.fetch_add(1, Ordering::SeqCst);
        let index = call.min(self.statuses.len() - 1);
        decode(&self.statuses[index])
    }

    async fn job_results(&self, _job_id: &str, limit: u32) -> DremioResult<QueryResult> {
        self.result_limits.lock().unwrap().push(limit);
        decode(&self.results)
    }
}
