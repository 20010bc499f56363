pub mod gav;
pub mod health_score;
pub mod version_record;

pub use gav::{ArtifactId, Gav, GroupId, Version};
pub use health_score::HealthScore;
pub use version_record::{CurrentVersion, LatestVersion};
