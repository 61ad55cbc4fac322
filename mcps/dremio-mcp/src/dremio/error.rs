//! Error types for Dremio operations

use reqwest::StatusCode;
use thiserror::Error;

use super::types::JobState;

/// Errors that can occur while talking to Dremio
#[derive(Error, Debug)]
pub enum DremioError {
    /// A table path segment was empty
    #[error("invalid identifier segment {0:?}: segments must be non-empty text")]
    InvalidIdentifier(String),

    /// A table reference was requested for an empty path
    #[error("table path must contain at least one segment")]
    EmptyTablePath,

    /// The statement is not a plain SELECT
    #[error("only SELECT statements are allowed")]
    NotSelect,

    /// Catalog search was called without a term
    #[error("search term must not be empty")]
    EmptySearchTerm,

    /// The job was still in flight after the last status check
    #[error("job {job_id} did not finish after {attempts} status checks")]
    Timeout {
        /// Dremio job identifier
        job_id: String,
        /// Number of status checks made after submission
        attempts: u32,
    },

    /// The job ended in FAILED or CANCELED
    #[error(
        "job {job_id} {state}: {message}{}",
        .detail.as_deref().map(|d| format!(" ({})", d)).unwrap_or_default()
    )]
    JobFailed {
        /// Dremio job identifier
        job_id: String,
        /// Terminal state reported by Dremio
        state: JobState,
        /// Error message reported by Dremio
        message: String,
        /// Cancellation reason or other detail, if any
        detail: Option<String>,
    },

    /// Dremio answered with a non-success status
    #[error("HTTP {status} from {url}: {body}")]
    Http {
        /// Response status
        status: StatusCode,
        /// Request URL
        url: String,
        /// Response body
        body: String,
    },

    /// The request could not be sent or the body could not be read
    #[error("request to {url} failed: {source}")]
    Request {
        /// Request URL
        url: String,
        /// Underlying transport error
        source: reqwest::Error,
    },

    /// A response body was not the JSON shape expected
    #[error("failed to decode {context}: {source}")]
    Decode {
        /// What was being decoded (usually the request URL)
        context: String,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// The configured base URL cannot carry path segments
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The bearer token contains characters not allowed in a header
    #[error("bearer token contains characters not allowed in an HTTP header")]
    InvalidCredential,

    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl DremioError {
    /// True for errors raised before any request is sent
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DremioError::InvalidIdentifier(_)
                | DremioError::EmptyTablePath
                | DremioError::NotSelect
                | DremioError::EmptySearchTerm
        )
    }
}

/// Result type alias for Dremio operations
pub type DremioResult<T> = Result<T, DremioError>;
