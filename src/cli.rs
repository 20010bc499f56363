use clap::Parser;

use crate::application::dto;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Markdown,
    Svg,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "svg" => Ok(OutputFormat::Svg),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json', 'markdown', or 'svg'",
                s
            )),
        }
    }
}

impl From<OutputFormat> for dto::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => dto::OutputFormat::Json,
            OutputFormat::Markdown => dto::OutputFormat::Markdown,
            OutputFormat::Svg => dto::OutputFormat::Svg,
        }
    }
}

/// Score the technical debt of Maven dependencies against Maven Central
#[derive(Parser, Debug)]
#[command(name = "mvn-debt")]
#[command(version)]
#[command(about = "Score the technical debt of Maven dependencies", long_about = None)]
pub struct Args {
    /// Path to the dependencies manifest (one group:artifact:version per line)
    #[arg(default_value = "dependencies.txt")]
    pub manifest: String,

    /// Output format: json, markdown, or svg
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Exclude artifacts matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "junit" -e "*-test"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Measure staleness against this time, seconds since the Unix epoch
    /// (defaults to the current time; useful for reproducible runs)
    #[arg(long, value_name = "SECS")]
    pub as_of: Option<i64>,

    /// Flag dependencies whose scores exceed this many days
    #[arg(long, value_name = "DAYS")]
    pub label_threshold: Option<i64>,

    /// Exit with code 1 when any score exceeds this many days (CI gate)
    #[arg(long, value_name = "DAYS")]
    pub fail_threshold: Option<i64>,

    /// Path to a config file (defaults to mvn-debt.config.yml next to the manifest)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
