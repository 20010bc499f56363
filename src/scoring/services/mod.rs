pub mod artifact_filter;
pub mod health_scorer;
pub mod manifest;

pub use artifact_filter::ArtifactFilter;
pub use health_scorer::{whole_days, HealthScorer, MILLIS_PER_DAY};
pub use manifest::parse_gav;
