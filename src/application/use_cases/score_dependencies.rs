use crate::application::dto::{ReportMetadata, ScoreRequest, ScoreResponse};
use crate::ports::outbound::{ArtifactRegistry, ManifestReader, ProgressReporter};
use crate::scoring::domain::{Gav, HealthScore};
use crate::scoring::services::{parse_gav, ArtifactFilter, HealthScorer};
use crate::shared::Result;
use chrono::Utc;
use futures::stream::{self, StreamExt};

/// Upper bound on in-flight registry lookups, to avoid hammering
/// Maven Central
const MAX_CONCURRENT_LOOKUPS: usize = 8;

/// ScoreDependenciesUseCase - Core use case for dependency health scoring
///
/// Orchestrates the scoring workflow: read the manifest, parse GAV
/// coordinates, look up each dependency's current and latest release in
/// the registry, and score the pair. Uses generic dependency injection
/// for all infrastructure dependencies.
///
/// A failed registry lookup skips that one dependency with a reported
/// warning; it never aborts the batch. Lines that do not parse as GAV
/// coordinates are skipped the same way.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `REG` - ArtifactRegistry implementation
/// * `PR` - ProgressReporter implementation
pub struct ScoreDependenciesUseCase<MR, REG, PR> {
    manifest_reader: MR,
    registry: REG,
    progress_reporter: PR,
}

impl<MR, REG, PR> ScoreDependenciesUseCase<MR, REG, PR>
where
    MR: ManifestReader,
    REG: ArtifactRegistry,
    PR: ProgressReporter,
{
    /// Creates a new ScoreDependenciesUseCase with injected dependencies
    pub fn new(manifest_reader: MR, registry: REG, progress_reporter: PR) -> Self {
        Self {
            manifest_reader,
            registry,
            progress_reporter,
        }
    }

    /// Executes the scoring use case
    ///
    /// # Returns
    /// ScoreResponse containing one HealthScore per scored dependency,
    /// in manifest order, plus run metadata
    pub async fn execute(&self, request: ScoreRequest) -> Result<ScoreResponse> {
        // Step 1: Read and parse the manifest
        let (gavs, unparseable) = self.read_and_parse_manifest(&request)?;

        // Step 2: Apply exclusion filters
        let filter = ArtifactFilter::new(request.exclude_patterns.clone())?;
        let before = gavs.len();
        let gavs = filter.filter_gavs(gavs);
        let excluded = before - gavs.len();
        if excluded > 0 {
            self.progress_reporter
                .report(&format!("🔦 Excluded {} dependency(ies) by pattern", excluded));
        }

        // Step 3: Look up and score each dependency
        let (scores, lookup_failures) = self.score_all(request.as_of_secs, gavs).await;

        self.progress_reporter.report_completion(&format!(
            "✅ Scored {} dependency(ies) ({} skipped)",
            scores.len(),
            unparseable + lookup_failures
        ));

        // Step 4: Build the response
        let metadata = ReportMetadata {
            generated_at: Utc::now().to_rfc3339(),
            as_of_secs: request.as_of_secs,
            manifest_path: request.manifest_path.display().to_string(),
            scored: scores.len(),
            skipped: unparseable + lookup_failures,
        };

        Ok(ScoreResponse::new(scores, metadata))
    }

    /// Reads the manifest and parses its lines into GAV coordinates,
    /// returning the coordinates and the count of skipped lines
    fn read_and_parse_manifest(&self, request: &ScoreRequest) -> Result<(Vec<Gav>, usize)> {
        self.progress_reporter.report(&format!(
            "📖 Loading dependencies manifest: {}",
            request.manifest_path.display()
        ));

        let content = self.manifest_reader.read_manifest(&request.manifest_path)?;

        let mut gavs = Vec::new();
        let mut unparseable = 0;
        for (line_no, line) in content.lines().enumerate() {
            match parse_gav(line) {
                Some(gav) => gavs.push(gav),
                None => {
                    let trimmed = line.trim();
                    // Blank and comment lines are skipped silently
                    if !trimmed.is_empty() && !trimmed.starts_with('#') {
                        unparseable += 1;
                        self.progress_reporter.report_error(&format!(
                            "⚠️  Skipping line {}: not a group:artifact:version coordinate",
                            line_no + 1
                        ));
                    }
                }
            }
        }

        self.progress_reporter
            .report(&format!("✅ Detected {} dependency(ies)", gavs.len()));

        Ok((gavs, unparseable))
    }

    /// Looks up and scores all coordinates with bounded concurrency,
    /// preserving manifest order. Returns the scores and the count of
    /// dependencies skipped because their registry lookups failed.
    async fn score_all(&self, as_of_secs: i64, gavs: Vec<Gav>) -> (Vec<HealthScore>, usize) {
        let total = gavs.len();
        let mut lookups = stream::iter(gavs)
            .map(|gav| self.score_one(as_of_secs, gav))
            .buffered(MAX_CONCURRENT_LOOKUPS);

        let mut scores = Vec::with_capacity(total);
        let mut failures = 0;
        let mut done = 0;

        while let Some((label, outcome)) = lookups.next().await {
            done += 1;
            self.progress_reporter
                .report_progress(done, total, Some(&label));

            match outcome {
                Ok(score) => scores.push(score),
                Err(e) => {
                    failures += 1;
                    self.progress_reporter
                        .report_error(&format!("⚠️  Skipping {}: {}", label, e));
                }
            }
        }

        (scores, failures)
    }

    /// Runs both registry lookups for one coordinate and scores the result
    async fn score_one(&self, as_of_secs: i64, gav: Gav) -> (String, Result<HealthScore>) {
        let label = gav.artifact_id().to_string();

        let outcome = async {
            let current = self.registry.release_date(&gav).await?;
            let latest = self.registry.latest_release(&gav).await?;
            Ok(HealthScorer::score(as_of_secs, &current, &latest))
        }
        .await;

        (label, outcome)
    }
}
