use crate::scoring::domain::Gav;

/// The version of a dependency as it appears in the manifest, augmented
/// with the registry's publish timestamp for that exact version when one
/// is known. An absent timestamp means the registry had no hit for the
/// coordinate, which is a valid state, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentVersion {
    gav: Gav,
    timestamp_millis: Option<i64>,
}

impl CurrentVersion {
    pub fn new(gav: Gav, timestamp_millis: Option<i64>) -> Self {
        Self {
            gav,
            timestamp_millis,
        }
    }

    pub fn gav(&self) -> &Gav {
        &self.gav
    }

    /// Publish time of this exact version, milliseconds since the Unix epoch
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.timestamp_millis
    }
}

/// The registry's notion of the newest published version of an artifact.
/// Both fields are optional: an unknown artifact yields an empty record,
/// and a known artifact may still lack a publish timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatestVersion {
    version: Option<String>,
    timestamp_millis: Option<i64>,
}

impl LatestVersion {
    pub fn new(version: Option<String>, timestamp_millis: Option<i64>) -> Self {
        Self {
            version,
            timestamp_millis,
        }
    }

    /// A record representing "the registry knows nothing about this artifact"
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Publish time of the latest version, milliseconds since the Unix epoch
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.timestamp_millis
    }
}
