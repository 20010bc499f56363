use crate::scoring::domain::{CurrentVersion, HealthScore, LatestVersion};

/// Milliseconds in one day (24 * 60 * 60 * 1000)
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Converts a duration in milliseconds to whole days, truncating toward
/// zero. `86_400_000 - 1` ms is 0 days, not 1; negative durations
/// truncate toward zero as well (`i64` division semantics).
pub fn whole_days(milliseconds: i64) -> i64 {
    milliseconds / MILLIS_PER_DAY
}

/// HealthScorer - the core scoring function.
///
/// Pure and deterministic: given an as-of time and the current/latest
/// version records it produces a HealthScore with no I/O and no shared
/// state, so it is safe to call from any number of tasks concurrently.
///
/// Timestamps in the version records are milliseconds since the Unix
/// epoch, while `as_of_secs` is seconds. The conversion happens once,
/// here, so callers never pre-convert and the two units cannot be mixed.
pub struct HealthScorer;

impl HealthScorer {
    /// Scores one dependency.
    ///
    /// * `ecosystem`: whole days between the as-of time and the latest
    ///   release's publish time. `0` when the registry had no timestamp
    ///   for the latest release.
    /// * `currency`: whole days the current version lags the latest
    ///   release, floored at `0` (the current version being newer than
    ///   "latest" indicates clock skew or a stale registry cache, not
    ///   negative debt). `0` when either timestamp is missing.
    /// * `latest_version`: the registry's latest version, falling back
    ///   to the current version when the registry knows no newer one.
    pub fn score(
        as_of_secs: i64,
        current: &CurrentVersion,
        latest: &LatestVersion,
    ) -> HealthScore {
        let gav = current.gav();

        let latest_version = latest
            .version()
            .unwrap_or(gav.version())
            .to_string();

        let (ecosystem, currency) = match latest.timestamp_millis() {
            Some(latest_millis) => {
                let ecosystem = whole_days(as_of_secs * 1000 - latest_millis);
                let currency = match current.timestamp_millis() {
                    Some(current_millis) => whole_days(latest_millis - current_millis).max(0),
                    None => 0,
                };
                (ecosystem, currency)
            }
            // No registry data for the latest release: report zero debt
            // rather than failing or omitting the fields
            None => (0, 0),
        };

        HealthScore {
            group_id: gav.group_id().to_string(),
            artifact_id: gav.artifact_id().to_string(),
            version: gav.version().to_string(),
            latest_version,
            ecosystem,
            currency,
        }
    }
}
