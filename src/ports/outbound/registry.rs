use crate::scoring::domain::{CurrentVersion, Gav, LatestVersion};
use crate::shared::Result;
use async_trait::async_trait;

/// ArtifactRegistry port for looking up artifact metadata
///
/// This port abstracts the package registry (Maven Central) that supplies
/// publish timestamps for exact versions and the newest published version
/// of an artifact.
///
/// "Not found" is a valid, representable state: both lookups return a
/// record with the optional fields absent rather than an error. Errors
/// are reserved for network, HTTP, and parse failures.
///
/// # Async Support
/// All methods are async so lookups for independent dependencies can run
/// concurrently. Implementations must be `Send + Sync`.
#[async_trait]
pub trait ArtifactRegistry: Send + Sync {
    /// Looks up the publish timestamp of the exact version in `gav`
    ///
    /// # Returns
    /// A CurrentVersion carrying the coordinate and, when the registry
    /// has a hit, its publish timestamp in milliseconds since the epoch
    ///
    /// # Errors
    /// Returns an error if the network request fails, the registry
    /// returns an error status, or the response cannot be parsed
    async fn release_date(&self, gav: &Gav) -> Result<CurrentVersion>;

    /// Looks up the newest published version of the artifact in `gav`
    /// (keyed on group and artifact only; the version field is ignored)
    ///
    /// # Returns
    /// A LatestVersion with the registry's latest version string and its
    /// publish timestamp, each absent when the registry has no record
    ///
    /// # Errors
    /// Returns an error if the network request fails, the registry
    /// returns an error status, or the response cannot be parsed
    async fn latest_release(&self, gav: &Gav) -> Result<LatestVersion>;
}
