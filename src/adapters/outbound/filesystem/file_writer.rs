use crate::ports::outbound::OutputPresenter;
use crate::shared::error::DebtError;
use crate::shared::security;
use crate::shared::Result;
use std::fs;
use std::path::PathBuf;

/// FileSystemWriter adapter for writing the formatted report to a file
///
/// This adapter implements the OutputPresenter port for file output,
/// refusing to write through symbolic links.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        // An existing target must not be a symlink
        if self.output_path.exists() {
            security::validate_not_symlink(&self.output_path, "write")?;
        }

        fs::write(&self.output_path, content).map_err(|e| {
            DebtError::FileWriteError {
                path: self.output_path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

/// StdoutPresenter adapter for writing the formatted report to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        println!("{}", content);
        Ok(())
    }
}
