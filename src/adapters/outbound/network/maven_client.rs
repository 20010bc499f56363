use crate::ports::outbound::ArtifactRegistry;
use crate::scoring::domain::{CurrentVersion, Gav, LatestVersion};
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Default base URL of the Maven Central search API
const DEFAULT_BASE_URL: &str = "https://search.maven.org/solrsearch/select";

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    response: SearchResponse,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "numFound")]
    num_found: u64,
    #[serde(default)]
    docs: Vec<SearchDoc>,
}

#[derive(Debug, Clone, Deserialize)]
struct SearchDoc {
    /// Publish time in milliseconds since the Unix epoch
    #[serde(default)]
    timestamp: Option<i64>,
    /// Present on group+artifact queries only
    #[serde(default, rename = "latestVersion")]
    latest_version: Option<String>,
}

/// MavenCentralClient adapter for fetching artifact metadata from the
/// Maven Central search API
///
/// This adapter implements the ArtifactRegistry port, providing async
/// network access to the solrsearch endpoint. A query for an exact
/// `g:a:v` coordinate yields that version's publish timestamp; a query
/// for `g:a` yields the newest published version and its timestamp.
///
/// # Async Support
/// Uses the async reqwest client for non-blocking HTTP requests, so
/// lookups for independent dependencies can run concurrently.
pub struct MavenCentralClient {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl MavenCentralClient {
    /// Creates a new client against the public Maven Central search API
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Creates a new client against a custom search endpoint
    /// (e.g., a corporate mirror or a test server)
    pub fn with_base_url(base_url: String) -> Result<Self> {
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            anyhow::bail!("Registry URL must start with http:// or https://: {}", base_url);
        }

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("mvn-debt/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url,
            max_retries: 3,
        })
    }

    /// Validates and sanitizes a coordinate component for URL safety
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        // Security: Prevent URL injection attacks
        if component.contains('/') || component.contains('\\') {
            anyhow::bail!(
                "Security: {} contains path separators which are not allowed",
                component_type
            );
        }

        if component.contains("..") {
            anyhow::bail!(
                "Security: {} contains '..' which is not allowed",
                component_type
            );
        }

        if component.contains('#') || component.contains('?') || component.contains('@') {
            anyhow::bail!(
                "Security: {} contains URL-unsafe characters",
                component_type
            );
        }

        Ok(())
    }

    /// Runs a solrsearch query with retry logic, returning the first
    /// document of the result set, or None when the registry has no hit
    async fn first_doc_with_retry(&self, query: &str) -> Result<Option<SearchDoc>> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.first_doc(query).await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        // Retry after a short wait (async)
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap())
    }

    /// Runs one solrsearch query
    async fn first_doc(&self, query: &str) -> Result<Option<SearchDoc>> {
        let url = format!("{}?q={}&rows=1&wt=json", self.base_url, query);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("Maven Central API returned status code {}", response.status());
        }

        let envelope: SearchEnvelope = response.json().await?;

        if envelope.response.num_found == 0 {
            return Ok(None);
        }

        Ok(envelope.response.docs.into_iter().next())
    }

    /// Builds the `g:{g}+AND+a:{a}` query for a coordinate
    fn group_artifact_query(gav: &Gav) -> Result<String> {
        Self::validate_url_component(gav.group_id(), "groupId")?;
        Self::validate_url_component(gav.artifact_id(), "artifactId")?;

        Ok(format!(
            "g:{}+AND+a:{}",
            urlencoding::encode(gav.group_id()),
            urlencoding::encode(gav.artifact_id())
        ))
    }

    /// Builds the `g:{g}+AND+a:{a}+AND+v:{v}` query for an exact version
    fn exact_version_query(gav: &Gav) -> Result<String> {
        Self::validate_url_component(gav.version(), "version")?;

        Ok(format!(
            "{}+AND+v:{}",
            Self::group_artifact_query(gav)?,
            urlencoding::encode(gav.version())
        ))
    }
}

#[async_trait]
impl ArtifactRegistry for MavenCentralClient {
    async fn release_date(&self, gav: &Gav) -> Result<CurrentVersion> {
        let query = Self::exact_version_query(gav)?;
        let doc = self.first_doc_with_retry(&query).await?;

        // No hit is a valid state: the coordinate simply has no known
        // publish timestamp
        let timestamp = doc.and_then(|d| d.timestamp);
        Ok(CurrentVersion::new(gav.clone(), timestamp))
    }

    async fn latest_release(&self, gav: &Gav) -> Result<LatestVersion> {
        let query = Self::group_artifact_query(gav)?;
        let doc = self.first_doc_with_retry(&query).await?;

        Ok(match doc {
            Some(d) => LatestVersion::new(d.latest_version, d.timestamp),
            None => LatestVersion::unknown(),
        })
    }
}

// Note: No Default implementation. Default::default() would panic if
// client creation fails, which is not safe for production. Use
// MavenCentralClient::new() explicitly and handle the Result.
