use crate::shared::Result;

/// Maximum length for group and artifact identifiers (security limit)
const MAX_COORDINATE_LENGTH: usize = 255;

/// Maximum length for version strings (security limit)
const MAX_VERSION_LENGTH: usize = 100;

fn validate_coordinate(value: &str, field: &str) -> Result<()> {
    if value.is_empty() {
        anyhow::bail!("{} cannot be empty", field);
    }

    // Security: Length limit to prevent DoS
    if value.len() > MAX_COORDINATE_LENGTH {
        anyhow::bail!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            field,
            value.len(),
            MAX_COORDINATE_LENGTH
        );
    }

    // Security: Restrict to the characters Maven coordinates actually use.
    // This prevents injection into registry query URLs.
    if !value
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        anyhow::bail!(
            "{} contains invalid characters. Only alphanumeric, hyphens, underscores, and dots are allowed.",
            field
        );
    }

    Ok(())
}

/// NewType wrapper for a Maven groupId with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupId(String);

impl GroupId {
    pub fn new(value: String) -> Result<Self> {
        validate_coordinate(&value, "groupId")?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for a Maven artifactId with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactId(String);

impl ArtifactId {
    pub fn new(value: String) -> Result<Self> {
        validate_coordinate(&value, "artifactId")?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for a version string with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(value: String) -> Result<Self> {
        if value.is_empty() {
            anyhow::bail!("version cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if value.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "version is too long ({} bytes). Maximum allowed: {} bytes",
                value.len(),
                MAX_VERSION_LENGTH
            );
        }

        // Versions additionally allow '+' (build metadata, e.g. "1.8.0+181")
        if !value
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == '_' || c == '+')
        {
            anyhow::bail!(
                "version contains invalid characters. Only alphanumeric, dots, hyphens, underscores, and plus are allowed."
            );
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// GAV value object: the groupId/artifactId/version triple identifying
/// a Maven artifact. Construction validates every field, so a Gav in
/// hand is always a complete, well-formed coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Gav {
    group_id: GroupId,
    artifact_id: ArtifactId,
    version: Version,
}

impl Gav {
    pub fn new(group_id: String, artifact_id: String, version: String) -> Result<Self> {
        Ok(Self {
            group_id: GroupId::new(group_id)?,
            artifact_id: ArtifactId::new(artifact_id)?,
            version: Version::new(version)?,
        })
    }

    pub fn group_id(&self) -> &str {
        self.group_id.as_str()
    }

    pub fn artifact_id(&self) -> &str {
        self.artifact_id.as_str()
    }

    pub fn version(&self) -> &str {
        self.version.as_str()
    }
}

impl std::fmt::Display for Gav {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}
