use async_trait::async_trait;
use mvn_debt::prelude::*;
use std::collections::{HashMap, HashSet};

/// Mock implementation of ArtifactRegistry backed by fixed data
///
/// Coordinates without an entry behave like registry misses (optional
/// fields absent), matching the real client's "not found" contract.
/// Artifacts added via `with_failure` return errors, simulating network
/// problems.
pub struct MockRegistry {
    /// Publish timestamps keyed by "group:artifact:version"
    release_dates: HashMap<String, i64>,
    /// Latest release keyed by "group:artifact"
    latest_releases: HashMap<String, (Option<String>, Option<i64>)>,
    /// Artifacts whose lookups fail
    failing_artifacts: HashSet<String>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self {
            release_dates: HashMap::new(),
            latest_releases: HashMap::new(),
            failing_artifacts: HashSet::new(),
        }
    }

    pub fn with_release_date(
        mut self,
        group: &str,
        artifact: &str,
        version: &str,
        timestamp_millis: i64,
    ) -> Self {
        self.release_dates.insert(
            format!("{}:{}:{}", group, artifact, version),
            timestamp_millis,
        );
        self
    }

    pub fn with_latest(
        mut self,
        group: &str,
        artifact: &str,
        version: &str,
        timestamp_millis: i64,
    ) -> Self {
        self.latest_releases.insert(
            format!("{}:{}", group, artifact),
            (Some(version.to_string()), Some(timestamp_millis)),
        );
        self
    }

    pub fn with_failure(mut self, artifact: &str) -> Self {
        self.failing_artifacts.insert(artifact.to_string());
        self
    }
}

impl Default for MockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArtifactRegistry for MockRegistry {
    async fn release_date(&self, gav: &Gav) -> Result<CurrentVersion> {
        if self.failing_artifacts.contains(gav.artifact_id()) {
            anyhow::bail!("Mock registry failure for {}", gav.artifact_id());
        }

        let key = format!("{}:{}:{}", gav.group_id(), gav.artifact_id(), gav.version());
        Ok(CurrentVersion::new(
            gav.clone(),
            self.release_dates.get(&key).copied(),
        ))
    }

    async fn latest_release(&self, gav: &Gav) -> Result<LatestVersion> {
        if self.failing_artifacts.contains(gav.artifact_id()) {
            anyhow::bail!("Mock registry failure for {}", gav.artifact_id());
        }

        let key = format!("{}:{}", gav.group_id(), gav.artifact_id());
        Ok(match self.latest_releases.get(&key) {
            Some((version, timestamp)) => LatestVersion::new(version.clone(), *timestamp),
            None => LatestVersion::unknown(),
        })
    }
}
