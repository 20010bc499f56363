use crate::ports::outbound::ManifestReader;
use crate::shared::error::DebtError;
use crate::shared::security;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading the dependencies manifest
///
/// This adapter implements the ManifestReader port, providing file
/// system access with the shared safety checks (no symlinks, regular
/// file, bounded size).
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, manifest_path: &Path) -> Result<String> {
        if !manifest_path.exists() {
            return Err(DebtError::ManifestNotFound {
                path: manifest_path.to_path_buf(),
                suggestion:
                    "Create a dependencies manifest with one group:artifact:version per line, or pass its path on the command line"
                        .to_string(),
            }
            .into());
        }

        security::validate_regular_file(manifest_path, "manifest")?;

        fs::read_to_string(manifest_path).map_err(|e| {
            DebtError::ManifestReadError {
                path: manifest_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
