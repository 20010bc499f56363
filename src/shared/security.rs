use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum file size for security (10 MB)
/// A dependencies manifest is a short text file; anything larger is suspect
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// # Security
/// This function uses `symlink_metadata()` instead of `metadata()` to ensure
/// we check the symlink itself, not the target it points to.
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates that a path exists and is a regular file within the size limit
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file exceeds MAX_FILE_SIZE
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e)
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            MAX_FILE_SIZE
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_regular_file_ok() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dependencies.txt");
        fs::write(&path, "org.slf4j:slf4j-api:1.7.36\n").unwrap();
        assert!(validate_regular_file(&path, "manifest").is_ok());
    }

    #[test]
    fn test_validate_regular_file_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");
        assert!(validate_regular_file(&path, "manifest").is_err());
    }

    #[test]
    fn test_validate_regular_file_directory() {
        let dir = TempDir::new().unwrap();
        let result = validate_regular_file(dir.path(), "manifest");
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("not a regular file"));
    }

    #[test]
    fn test_validate_not_symlink_regular_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("file.txt");
        fs::write(&path, "content").unwrap();
        assert!(validate_not_symlink(&path, "read").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_not_symlink_rejects_symlink() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("target.txt");
        fs::write(&target, "content").unwrap();
        let link = dir.path().join("link.txt");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = validate_not_symlink(&link, "read");
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("symbolic link"));
    }
}
