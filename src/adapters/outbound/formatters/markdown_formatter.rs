use crate::application::dto::ReportMetadata;
use crate::ports::outbound::ReportFormatter;
use crate::scoring::domain::HealthScore;
use crate::shared::Result;

/// Markdown table header for the score table
const TABLE_HEADER: &str =
    "| Artifact | Group | Version | Latest | Currency (days) | Ecosystem (days) |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str =
    "|----------|-------|---------|--------|-----------------|------------------|\n";

/// MarkdownFormatter adapter for generating the health report as a
/// Markdown document
///
/// This adapter implements the ReportFormatter port for Markdown format:
/// a score table with Maven Central links plus a section listing the
/// dependencies whose debt exceeds the label threshold.
pub struct MarkdownFormatter {
    label_threshold_days: i64,
}

impl MarkdownFormatter {
    pub fn new(label_threshold_days: i64) -> Self {
        Self {
            label_threshold_days,
        }
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Generate a Markdown hyperlink to the artifact's Maven Central page
    fn artifact_link(group_id: &str, artifact_id: &str) -> String {
        format!(
            "[{}](https://central.sonatype.com/artifact/{}/{})",
            Self::escape_markdown_table_cell(artifact_id),
            group_id,
            artifact_id
        )
    }

    /// Renders the header and run metadata
    fn render_header(&self, output: &mut String, metadata: &ReportMetadata) {
        output.push_str("# Dependency Health Report\n\n");
        output.push_str(&format!("- Manifest: `{}`\n", metadata.manifest_path));
        output.push_str(&format!("- Generated: {}\n", metadata.generated_at));
        output.push_str(&format!(
            "- Dependencies scored: {} ({} skipped)\n\n",
            metadata.scored, metadata.skipped
        ));
    }

    /// Renders the score table
    fn render_scores(&self, output: &mut String, scores: &[HealthScore]) {
        output.push_str("## Scores\n\n");
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for score in scores {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                Self::artifact_link(&score.group_id, &score.artifact_id),
                Self::escape_markdown_table_cell(&score.group_id),
                Self::escape_markdown_table_cell(&score.version),
                Self::escape_markdown_table_cell(&score.latest_version),
                score.currency,
                score.ecosystem
            ));
        }
        output.push('\n');
    }

    /// Renders the section listing scores past the label threshold
    fn render_flagged(&self, output: &mut String, scores: &[HealthScore]) {
        output.push_str(&format!(
            "## Stale dependencies (> {} days)\n\n",
            self.label_threshold_days
        ));

        let flagged: Vec<&HealthScore> = scores
            .iter()
            .filter(|s| s.exceeds(self.label_threshold_days))
            .collect();

        if flagged.is_empty() {
            output.push_str("None. 🎉\n");
            return;
        }

        for score in flagged {
            output.push_str(&format!(
                "- **{}** {} → {} (currency {} days, ecosystem {} days)\n",
                Self::escape_markdown_table_cell(&score.artifact_id),
                Self::escape_markdown_table_cell(&score.version),
                Self::escape_markdown_table_cell(&score.latest_version),
                score.currency,
                score.ecosystem
            ));
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, scores: &[HealthScore], metadata: &ReportMetadata) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, metadata);
        self.render_scores(&mut output, scores);
        self.render_flagged(&mut output, scores);

        Ok(output)
    }
}
