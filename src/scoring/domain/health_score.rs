use serde::Serialize;

/// Health score for a single dependency.
///
/// `ecosystem` is the number of whole days since the latest known release
/// of the artifact, relative to the as-of time. `currency` is the number
/// of whole days by which the in-use version lags that latest release.
/// Both default to `0` when the registry had no timestamp data, so the
/// fields are always present for downstream renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthScore {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    /// Latest published version, or the current version when the
    /// registry knows no newer one
    pub latest_version: String,
    /// Days since the latest release, relative to the as-of time
    pub ecosystem: i64,
    /// Days the current version lags the latest release, never negative
    pub currency: i64,
}

impl HealthScore {
    /// True when either score exceeds the given threshold in days
    pub fn exceeds(&self, threshold_days: i64) -> bool {
        self.currency > threshold_days || self.ecosystem > threshold_days
    }
}
