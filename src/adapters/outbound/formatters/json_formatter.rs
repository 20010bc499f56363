use crate::application::dto::ReportMetadata;
use crate::ports::outbound::ReportFormatter;
use crate::scoring::domain::HealthScore;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report<'a> {
    metadata: &'a ReportMetadata,
    scores: &'a [HealthScore],
}

/// JsonFormatter adapter for generating the full report as JSON
///
/// This adapter implements the ReportFormatter port for JSON output,
/// serializing the run metadata and every score with camelCase keys
/// (`groupId`, `artifactId`, `latestVersion`, `ecosystem`, `currency`).
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, scores: &[HealthScore], metadata: &ReportMetadata) -> Result<String> {
        let report = Report { metadata, scores };
        serde_json::to_string_pretty(&report)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON report: {}", e))
    }
}
