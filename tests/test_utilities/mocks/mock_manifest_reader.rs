use mvn_debt::prelude::*;
use std::path::Path;

/// Mock implementation of ManifestReader that returns fixed content
pub struct MockManifestReader {
    content: String,
}

impl MockManifestReader {
    pub fn new(content: String) -> Self {
        Self { content }
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, _manifest_path: &Path) -> Result<String> {
        Ok(self.content.clone())
    }
}

/// Mock implementation of ManifestReader that always fails
pub struct FailingManifestReader;

impl ManifestReader for FailingManifestReader {
    fn read_manifest(&self, manifest_path: &Path) -> Result<String> {
        anyhow::bail!("Mock failure reading {}", manifest_path.display())
    }
}
