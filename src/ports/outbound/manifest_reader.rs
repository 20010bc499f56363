use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for reading the dependencies manifest
///
/// This port abstracts the file system operations needed to read the
/// plain-text dependencies manifest (one GAV coordinate per line).
pub trait ManifestReader {
    /// Reads the manifest file at the given path
    ///
    /// # Returns
    /// The raw content of the manifest as a string
    ///
    /// # Errors
    /// Returns an error if:
    /// - The manifest file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_manifest(&self, manifest_path: &Path) -> Result<String>;
}
