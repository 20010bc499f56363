/// Integration tests for the application layer
mod test_utilities;

use mvn_debt::prelude::*;
use std::path::PathBuf;
use test_utilities::mocks::*;

const AS_OF: i64 = 1_700_000_000;

/// 90 days before AS_OF, in milliseconds
const NINETY_DAYS_AGO: i64 = (AS_OF - 90 * 86_400) * 1000;

/// 400 days before AS_OF, in milliseconds
const FOUR_HUNDRED_DAYS_AGO: i64 = (AS_OF - 400 * 86_400) * 1000;

fn use_case(
    manifest: &str,
    registry: MockRegistry,
) -> ScoreDependenciesUseCase<MockManifestReader, MockRegistry, MockProgressReporter> {
    ScoreDependenciesUseCase::new(
        MockManifestReader::new(manifest.to_string()),
        registry,
        MockProgressReporter::new(),
    )
}

fn request(exclude: Vec<String>) -> ScoreRequest {
    ScoreRequest::new(PathBuf::from("dependencies.txt"), AS_OF, exclude)
}

#[tokio::test]
async fn test_score_dependencies_happy_path() {
    let manifest = "\
# runtime dependencies
org.slf4j:slf4j-api:1.7.36
com.google.guava:guava:31.0-jre
";
    let registry = MockRegistry::new()
        .with_release_date("org.slf4j", "slf4j-api", "1.7.36", FOUR_HUNDRED_DAYS_AGO)
        .with_latest("org.slf4j", "slf4j-api", "2.0.9", NINETY_DAYS_AGO)
        .with_release_date("com.google.guava", "guava", "31.0-jre", NINETY_DAYS_AGO)
        .with_latest("com.google.guava", "guava", "33.0-jre", NINETY_DAYS_AGO);

    let response = use_case(manifest, registry).execute(request(vec![])).await.unwrap();

    assert_eq!(response.scores.len(), 2);
    assert_eq!(response.metadata.scored, 2);
    assert_eq!(response.metadata.skipped, 0);

    // Manifest order is preserved
    let slf4j = &response.scores[0];
    assert_eq!(slf4j.artifact_id, "slf4j-api");
    assert_eq!(slf4j.version, "1.7.36");
    assert_eq!(slf4j.latest_version, "2.0.9");
    // Latest release was 90 days before as-of
    assert_eq!(slf4j.ecosystem, 90);
    // Current release was 310 days before the latest release
    assert_eq!(slf4j.currency, 310);

    let guava = &response.scores[1];
    assert_eq!(guava.artifact_id, "guava");
    // Same publish time for current and latest: fully current
    assert_eq!(guava.currency, 0);
    assert_eq!(guava.ecosystem, 90);
}

#[tokio::test]
async fn test_unknown_artifact_scores_zero() {
    let manifest = "com.internal:private-lib:1.0.0\n";
    let registry = MockRegistry::new();

    let response = use_case(manifest, registry).execute(request(vec![])).await.unwrap();

    assert_eq!(response.scores.len(), 1);
    let score = &response.scores[0];
    // No registry data: latestVersion falls back, scores report zero debt
    assert_eq!(score.latest_version, "1.0.0");
    assert_eq!(score.ecosystem, 0);
    assert_eq!(score.currency, 0);
}

#[tokio::test]
async fn test_unparseable_lines_are_skipped() {
    let manifest = "\
org.slf4j:slf4j-api:1.7.36
this is not a coordinate

# a comment
also-not-a-coordinate
";
    let registry = MockRegistry::new()
        .with_latest("org.slf4j", "slf4j-api", "2.0.9", NINETY_DAYS_AGO);

    let response = use_case(manifest, registry).execute(request(vec![])).await.unwrap();

    // Blank and comment lines are silent; the two junk lines count as skipped
    assert_eq!(response.scores.len(), 1);
    assert_eq!(response.metadata.skipped, 2);
}

#[tokio::test]
async fn test_registry_failure_skips_only_that_dependency() {
    let manifest = "\
org.slf4j:slf4j-api:1.7.36
org.broken:broken-lib:1.0.0
com.google.guava:guava:31.0-jre
";
    let registry = MockRegistry::new()
        .with_latest("org.slf4j", "slf4j-api", "2.0.9", NINETY_DAYS_AGO)
        .with_latest("com.google.guava", "guava", "33.0-jre", NINETY_DAYS_AGO)
        .with_failure("broken-lib");

    let reporter = MockProgressReporter::new();
    let use_case = ScoreDependenciesUseCase::new(
        MockManifestReader::new(manifest.to_string()),
        registry,
        reporter,
    );

    let response = use_case.execute(request(vec![])).await.unwrap();

    assert_eq!(response.scores.len(), 2);
    assert_eq!(response.metadata.skipped, 1);
    assert_eq!(response.scores[0].artifact_id, "slf4j-api");
    assert_eq!(response.scores[1].artifact_id, "guava");
}

#[tokio::test]
async fn test_exclusion_patterns_filter_artifacts() {
    let manifest = "\
org.slf4j:slf4j-api:1.7.36
junit:junit:4.13.2
org.mockito:mockito-core:4.0.0
";
    let registry = MockRegistry::new()
        .with_latest("org.slf4j", "slf4j-api", "2.0.9", NINETY_DAYS_AGO);

    let response = use_case(manifest, registry)
        .execute(request(vec!["junit".to_string(), "mockito-*".to_string()]))
        .await
        .unwrap();

    assert_eq!(response.scores.len(), 1);
    assert_eq!(response.scores[0].artifact_id, "slf4j-api");
}

#[tokio::test]
async fn test_manifest_read_failure_aborts() {
    let use_case = ScoreDependenciesUseCase::new(
        FailingManifestReader,
        MockRegistry::new(),
        MockProgressReporter::new(),
    );

    let result = use_case.execute(request(vec![])).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_invalid_exclude_pattern_aborts() {
    let use_case = ScoreDependenciesUseCase::new(
        MockManifestReader::new("g:a:1.0\n".to_string()),
        MockRegistry::new(),
        MockProgressReporter::new(),
    );

    let result = use_case
        .execute(request(vec!["bad/pattern".to_string()]))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_empty_manifest_yields_empty_report() {
    let response = use_case("", MockRegistry::new())
        .execute(request(vec![]))
        .await
        .unwrap();

    assert!(response.scores.is_empty());
    assert_eq!(response.metadata.scored, 0);
    assert_eq!(response.metadata.skipped, 0);
}

#[tokio::test]
async fn test_scores_render_through_formatters() {
    let manifest = "org.slf4j:slf4j-api:1.7.36\n";
    let registry = MockRegistry::new()
        .with_release_date("org.slf4j", "slf4j-api", "1.7.36", FOUR_HUNDRED_DAYS_AGO)
        .with_latest("org.slf4j", "slf4j-api", "2.0.9", NINETY_DAYS_AGO);

    let response = use_case(manifest, registry).execute(request(vec![])).await.unwrap();

    let json = JsonFormatter::new()
        .format(&response.scores, &response.metadata)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["scores"][0]["artifactId"], "slf4j-api");
    assert_eq!(value["scores"][0]["latestVersion"], "2.0.9");

    let markdown = MarkdownFormatter::new(180)
        .format(&response.scores, &response.metadata)
        .unwrap();
    assert!(markdown.contains("slf4j-api"));

    let svg = SvgPlotFormatter::new(180)
        .format(&response.scores, &response.metadata)
        .unwrap();
    assert!(svg.contains("<circle"));
    // currency 310 exceeds the threshold, so the point is labeled
    assert!(svg.contains(">slf4j-api</text>"));
}

#[tokio::test]
async fn test_progress_reporter_observes_run() {
    let manifest = "org.slf4j:slf4j-api:1.7.36\nnot a coordinate\n";
    let registry = MockRegistry::new()
        .with_latest("org.slf4j", "slf4j-api", "2.0.9", NINETY_DAYS_AGO);

    let reporter = std::sync::Arc::new(MockProgressReporter::new());
    let use_case = ScoreDependenciesUseCase::new(
        MockManifestReader::new(manifest.to_string()),
        registry,
        SharedMockProgressReporter(reporter.clone()),
    );

    use_case.execute(request(vec![])).await.unwrap();

    let messages = reporter.messages();
    assert!(messages.iter().any(|m| m.contains("Detected 1 dependency")));
    assert!(messages.iter().any(|m| m.contains("Scored 1 dependency")));

    let errors = reporter.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Skipping line 2"));
}
