use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter, SvgPlotFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for the different
/// formatter implementations, following the Factory Pattern. It belongs
/// in the application layer as it orchestrates the selection of
/// infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    /// * `label_threshold_days` - Scores past this many days are flagged
    ///   (labeled in the plot, listed in the Markdown stale section)
    pub fn create(format: OutputFormat, label_threshold_days: i64) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(label_threshold_days)),
            OutputFormat::Svg => Box::new(SvgPlotFormatter::new(label_threshold_days)),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON report...",
            OutputFormat::Markdown => "📝 Generating Markdown report...",
            OutputFormat::Svg => "📝 Generating SVG scatter plot...",
        }
    }
}
