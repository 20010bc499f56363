//! mvn-debt - Technical debt scoring for Maven dependencies
//!
//! This library measures how far an application's dependencies lag behind
//! Maven Central: for each `group:artifact:version` coordinate in a
//! manifest it derives an *ecosystem* score (days since the artifact's
//! latest release) and a *currency* score (days the in-use version lags
//! that latest release), then renders the results as JSON, Markdown, or
//! an SVG scatter plot.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`scoring`): Pure scoring logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use mvn_debt::prelude::*;
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let manifest_reader = FileSystemReader::new();
//! let registry = CachingRegistry::new(MavenCentralClient::new()?);
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = ScoreDependenciesUseCase::new(manifest_reader, registry, progress_reporter);
//!
//! // Execute
//! let request = ScoreRequest::new(PathBuf::from("dependencies.txt"), 1_700_000_000, vec![]);
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let formatter = SvgPlotFormatter::new(180);
//! let output = formatter.format(&response.scores, &response.metadata)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod scoring;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, SvgPlotFormatter,
    };
    pub use crate::adapters::outbound::network::{CachingRegistry, MavenCentralClient};
    pub use crate::application::dto::{OutputFormat, ReportMetadata, ScoreRequest, ScoreResponse};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::use_cases::ScoreDependenciesUseCase;
    pub use crate::ports::outbound::{
        ArtifactRegistry, ManifestReader, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::scoring::domain::{CurrentVersion, Gav, HealthScore, LatestVersion};
    pub use crate::scoring::services::{parse_gav, whole_days, ArtifactFilter, HealthScorer};
    pub use crate::shared::Result;
}
