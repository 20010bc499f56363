use mvn_debt::application::dto;
use mvn_debt::cli::{Args, OutputFormat};
use mvn_debt::config::{self, ConfigFile};
use mvn_debt::prelude::*;
use mvn_debt::shared::error::ExitCode;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

/// Default flagging threshold, in days
const DEFAULT_LABEL_THRESHOLD: i64 = 180;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red());
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run() -> Result<ExitCode> {
    // Parse command-line arguments (clap exits with code 2 on bad input)
    let args = Args::parse_args();
    let manifest_path = PathBuf::from(&args.manifest);

    // Load config: explicit path wins, otherwise look next to the manifest
    let config = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(Path::new(path))?),
        None => config::discover_config(manifest_dir(&manifest_path))?,
    };

    let settings = Settings::resolve(&args, config)?;

    // Create adapters (Dependency Injection)
    let manifest_reader = FileSystemReader::new();
    let registry = CachingRegistry::new(match settings.registry_url.clone() {
        Some(url) => MavenCentralClient::with_base_url(url)?,
        None => MavenCentralClient::new()?,
    });
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = ScoreDependenciesUseCase::new(manifest_reader, registry, progress_reporter);

    // Execute use case
    let request = ScoreRequest::new(
        manifest_path,
        settings.as_of_secs,
        settings.exclude_patterns.clone(),
    );
    let response = use_case.execute(request).await?;

    // Display progress message
    eprintln!("{}", FormatterFactory::progress_message(settings.format));

    // Create formatter using factory
    let formatter = FormatterFactory::create(settings.format, settings.label_threshold);
    let formatted_output = formatter.format(&response.scores, &response.metadata)?;

    // Present output
    let presenter: Box<dyn OutputPresenter> = match settings.output.clone() {
        Some(output_path) => Box::new(FileSystemWriter::new(PathBuf::from(output_path))),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&formatted_output)?;

    // Console summary
    let flagged = response
        .scores
        .iter()
        .filter(|s| s.exceeds(settings.label_threshold))
        .count();
    if flagged > 0 {
        eprintln!(
            "{}",
            format!(
                "🚩 {} dependency(ies) exceed {} days of debt",
                flagged, settings.label_threshold
            )
            .yellow()
        );
    }

    // CI gate
    if let Some(fail_threshold) = settings.fail_threshold {
        if response.scores.iter().any(|s| s.exceeds(fail_threshold)) {
            eprintln!(
                "{}",
                format!("❌ Debt exceeds the failure threshold ({} days)", fail_threshold).red()
            );
            return Ok(ExitCode::DebtAboveThreshold);
        }
    }

    Ok(ExitCode::Success)
}

/// Directory the manifest lives in, for config auto-discovery
fn manifest_dir(manifest_path: &Path) -> &Path {
    match manifest_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Effective settings after merging CLI flags over config file values.
/// CLI flags always win; config fills the gaps; defaults fill the rest.
#[derive(Debug)]
struct Settings {
    format: dto::OutputFormat,
    output: Option<String>,
    exclude_patterns: Vec<String>,
    as_of_secs: i64,
    label_threshold: i64,
    fail_threshold: Option<i64>,
    registry_url: Option<String>,
}

impl Settings {
    fn resolve(args: &Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let format = match args.format {
            Some(format) => format.into(),
            None => match config.format.as_deref() {
                Some(s) => OutputFormat::from_str(s)
                    .map_err(|e| anyhow::anyhow!("Invalid format in config file: {}", e))?
                    .into(),
                None => dto::OutputFormat::Json,
            },
        };

        let exclude_patterns = if args.exclude.is_empty() {
            config.exclude_artifacts.unwrap_or_default()
        } else {
            args.exclude.clone()
        };

        let as_of_secs = args
            .as_of
            .unwrap_or_else(|| chrono::Utc::now().timestamp());

        let label_threshold = args
            .label_threshold
            .or(config.label_threshold)
            .unwrap_or(DEFAULT_LABEL_THRESHOLD);

        let fail_threshold = args.fail_threshold.or(config.fail_threshold);

        Ok(Self {
            format,
            output: args.output.clone(),
            exclude_patterns,
            as_of_secs,
            label_threshold,
            fail_threshold,
            registry_url: config.registry_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(argv)
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::resolve(&args(&["mvn-debt"]), None).unwrap();
        assert_eq!(settings.format, dto::OutputFormat::Json);
        assert_eq!(settings.label_threshold, DEFAULT_LABEL_THRESHOLD);
        assert!(settings.exclude_patterns.is_empty());
        assert!(settings.fail_threshold.is_none());
        assert!(settings.registry_url.is_none());
    }

    #[test]
    fn test_settings_cli_overrides_config() {
        let config = ConfigFile {
            format: Some("markdown".to_string()),
            exclude_artifacts: Some(vec!["from-config".to_string()]),
            label_threshold: Some(30),
            ..Default::default()
        };
        let settings = Settings::resolve(
            &args(&["mvn-debt", "-f", "svg", "-e", "from-cli", "--label-threshold", "90"]),
            Some(config),
        )
        .unwrap();

        assert_eq!(settings.format, dto::OutputFormat::Svg);
        assert_eq!(settings.exclude_patterns, vec!["from-cli".to_string()]);
        assert_eq!(settings.label_threshold, 90);
    }

    #[test]
    fn test_settings_config_fills_gaps() {
        let config = ConfigFile {
            format: Some("markdown".to_string()),
            fail_threshold: Some(365),
            registry_url: Some("https://mirror.example.com/select".to_string()),
            ..Default::default()
        };
        let settings = Settings::resolve(&args(&["mvn-debt"]), Some(config)).unwrap();

        assert_eq!(settings.format, dto::OutputFormat::Markdown);
        assert_eq!(settings.fail_threshold, Some(365));
        assert_eq!(
            settings.registry_url.as_deref(),
            Some("https://mirror.example.com/select")
        );
    }

    #[test]
    fn test_settings_invalid_config_format_rejected() {
        let config = ConfigFile {
            format: Some("png".to_string()),
            ..Default::default()
        };
        let result = Settings::resolve(&args(&["mvn-debt"]), Some(config));
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_as_of_passthrough() {
        let settings =
            Settings::resolve(&args(&["mvn-debt", "--as-of", "1700000000"]), None).unwrap();
        assert_eq!(settings.as_of_secs, 1_700_000_000);
    }

    #[test]
    fn test_manifest_dir_with_parent() {
        assert_eq!(
            manifest_dir(Path::new("project/dependencies.txt")),
            Path::new("project")
        );
    }

    #[test]
    fn test_manifest_dir_bare_filename() {
        assert_eq!(manifest_dir(Path::new("dependencies.txt")), Path::new("."));
    }
}
