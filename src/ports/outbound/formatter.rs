use crate::application::dto::ReportMetadata;
use crate::scoring::domain::HealthScore;
use crate::shared::Result;

/// ReportFormatter port for rendering a health report
///
/// This port abstracts the output representation (JSON, Markdown, SVG
/// scatter plot) of a sequence of health scores. Formatters read the
/// scores and are otherwise decoupled from how they were computed.
pub trait ReportFormatter {
    /// Renders the scores and report metadata into the target format
    ///
    /// # Errors
    /// Returns an error if serialization of the report fails
    fn format(&self, scores: &[HealthScore], metadata: &ReportMetadata) -> Result<String>;
}
