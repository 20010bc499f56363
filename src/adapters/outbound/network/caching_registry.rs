use crate::ports::outbound::ArtifactRegistry;
use crate::scoring::domain::{CurrentVersion, Gav, LatestVersion};
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingRegistry wraps an ArtifactRegistry and adds in-memory caching.
///
/// This adapter implements the decorator pattern to add caching
/// capability to any ArtifactRegistry implementation. A manifest often
/// repeats a group/artifact pair across versions, and the latest-release
/// lookup is keyed on group+artifact only, so caching removes duplicate
/// network round trips. The cache is thread-safe and suitable for
/// concurrent access.
///
/// # Architecture
/// In hexagonal architecture, caching is an implementation detail of the
/// adapter layer. The domain layer only cares about fetching registry
/// metadata - whether it comes from cache or API is transparent.
pub struct CachingRegistry<R: ArtifactRegistry> {
    inner: R,
    release_dates: Arc<DashMap<Gav, CurrentVersion>>,
    latest_releases: Arc<DashMap<(String, String), LatestVersion>>,
}

impl<R: ArtifactRegistry> CachingRegistry<R> {
    /// Creates a new caching registry wrapping the given inner registry
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            release_dates: Arc::new(DashMap::new()),
            latest_releases: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache sizes (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_sizes(&self) -> (usize, usize) {
        (self.release_dates.len(), self.latest_releases.len())
    }
}

#[async_trait]
impl<R: ArtifactRegistry> ArtifactRegistry for CachingRegistry<R> {
    async fn release_date(&self, gav: &Gav) -> Result<CurrentVersion> {
        if let Some(cached) = self.release_dates.get(gav) {
            return Ok(cached.clone());
        }

        let current = self.inner.release_date(gav).await?;
        self.release_dates.insert(gav.clone(), current.clone());
        Ok(current)
    }

    async fn latest_release(&self, gav: &Gav) -> Result<LatestVersion> {
        let key = (gav.group_id().to_string(), gav.artifact_id().to_string());

        if let Some(cached) = self.latest_releases.get(&key) {
            return Ok(cached.clone());
        }

        let latest = self.inner.latest_release(gav).await?;
        self.latest_releases.insert(key, latest.clone());
        Ok(latest)
    }
}
