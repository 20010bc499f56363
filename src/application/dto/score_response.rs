use crate::scoring::domain::HealthScore;
use serde::Serialize;

/// Metadata describing one scoring run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    /// RFC 3339 timestamp of when the report was generated
    pub generated_at: String,
    /// The as-of time the scores were measured against, seconds since epoch
    pub as_of_secs: i64,
    /// Manifest the dependencies were read from
    pub manifest_path: String,
    /// Number of dependencies successfully scored
    pub scored: usize,
    /// Number of manifest lines or lookups that were skipped
    pub skipped: usize,
}

/// ScoreResponse - Internal response DTO from the scoring use case
///
/// Adapters (formatters) turn this into the requested output format.
#[derive(Debug, Clone)]
pub struct ScoreResponse {
    /// One health score per successfully scored dependency, in manifest order
    pub scores: Vec<HealthScore>,
    /// Run metadata (timestamps, counts)
    pub metadata: ReportMetadata,
}

impl ScoreResponse {
    pub fn new(scores: Vec<HealthScore>, metadata: ReportMetadata) -> Self {
        Self { scores, metadata }
    }
}
