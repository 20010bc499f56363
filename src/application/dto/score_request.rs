use std::path::PathBuf;

/// ScoreRequest - Internal request DTO for the dependency scoring use case
///
/// This DTO represents the internal request structure used within
/// the application layer. It may differ from the CLI surface.
#[derive(Debug, Clone)]
pub struct ScoreRequest {
    /// Path to the dependencies manifest file
    pub manifest_path: PathBuf,
    /// The "now" against which staleness is measured, seconds since epoch.
    /// Caller-supplied so runs are deterministic and testable.
    pub as_of_secs: i64,
    /// Patterns for excluding artifacts from the report
    pub exclude_patterns: Vec<String>,
}

impl ScoreRequest {
    pub fn new(manifest_path: PathBuf, as_of_secs: i64, exclude_patterns: Vec<String>) -> Self {
        Self {
            manifest_path,
            as_of_secs,
            exclude_patterns,
        }
    }
}
