use crate::scoring::domain::Gav;
use crate::shared::Result;

/// Maximum number of exclude patterns to prevent DoS attacks
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern to prevent DoS attacks
const MAX_PATTERN_LENGTH: usize = 255;

/// ArtifactFilter - excludes dependencies by artifactId pattern
///
/// Supports wildcard patterns using '*' to match zero or more characters.
/// Patterns are case-sensitive and validated against a character whitelist.
#[derive(Debug)]
pub struct ArtifactFilter {
    patterns: Vec<ExcludePattern>,
}

impl ArtifactFilter {
    /// Creates a new ArtifactFilter from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern format (length, characters)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            anyhow::bail!(
                "Too many exclusion patterns: {} (maximum: {})",
                patterns.len(),
                MAX_EXCLUDE_PATTERNS
            );
        }

        let mut compiled = Vec::new();
        for pattern in patterns {
            compiled.push(ExcludePattern::new(pattern)?);
        }

        Ok(Self { patterns: compiled })
    }

    /// Retains only the coordinates whose artifactId matches no pattern
    pub fn filter_gavs(&self, gavs: Vec<Gav>) -> Vec<Gav> {
        gavs.into_iter()
            .filter(|gav| !self.matches(gav.artifact_id()))
            .collect()
    }

    fn matches(&self, artifact_id: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(artifact_id))
    }
}

/// A single compiled exclusion pattern
#[derive(Debug)]
struct ExcludePattern {
    /// Literal segments between '*' wildcards, in order
    segments: Vec<String>,
    starts_with_wildcard: bool,
    ends_with_wildcard: bool,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        if pattern.is_empty() {
            anyhow::bail!("Exclusion pattern cannot be empty");
        }

        if pattern.len() > MAX_PATTERN_LENGTH {
            anyhow::bail!(
                "Exclusion pattern is too long ({} bytes). Maximum allowed: {} bytes",
                pattern.len(),
                MAX_PATTERN_LENGTH
            );
        }

        if !pattern
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.' || c == '*')
        {
            anyhow::bail!(
                "Exclusion pattern contains invalid characters: {}. Only alphanumeric, hyphens, underscores, dots, and '*' are allowed.",
                pattern
            );
        }

        let starts_with_wildcard = pattern.starts_with('*');
        let ends_with_wildcard = pattern.ends_with('*');
        let segments = pattern
            .split('*')
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();

        Ok(Self {
            segments,
            starts_with_wildcard,
            ends_with_wildcard,
        })
    }

    fn matches(&self, value: &str) -> bool {
        // Pattern was all wildcards
        if self.segments.is_empty() {
            return self.starts_with_wildcard;
        }

        let mut remaining = value;

        for (i, segment) in self.segments.iter().enumerate() {
            let first = i == 0;
            if first && !self.starts_with_wildcard {
                if !remaining.starts_with(segment.as_str()) {
                    return false;
                }
                remaining = &remaining[segment.len()..];
            } else {
                match remaining.find(segment.as_str()) {
                    Some(pos) => remaining = &remaining[pos + segment.len()..],
                    None => return false,
                }
            }
        }

        // Without a trailing wildcard the last segment must end the value
        if !self.ends_with_wildcard && !remaining.is_empty() {
            // The last segment may have matched too early; accept only an
            // exact suffix match
            return value.ends_with(self.segments.last().unwrap().as_str())
                && self.matches_with_suffix_anchor(value);
        }

        true
    }

    /// Re-runs the match with the final segment anchored to the end
    fn matches_with_suffix_anchor(&self, value: &str) -> bool {
        let last = self.segments.last().unwrap();
        let anchored_len = value.len() - last.len();
        let prefix = &value[..anchored_len];

        let mut remaining = prefix;
        for (i, segment) in self.segments[..self.segments.len() - 1].iter().enumerate() {
            let first = i == 0;
            if first && !self.starts_with_wildcard {
                if !remaining.starts_with(segment.as_str()) {
                    return false;
                }
                remaining = &remaining[segment.len()..];
            } else {
                match remaining.find(segment.as_str()) {
                    Some(pos) => remaining = &remaining[pos + segment.len()..],
                    None => return false,
                }
            }
        }
        true
    }
}
