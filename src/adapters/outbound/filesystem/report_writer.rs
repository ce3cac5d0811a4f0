use crate::ports::outbound::OutputPresenter;
use crate::shared::error::DatastoreError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// FileSystemWriter adapter for writing the rendered report to a file
///
/// This adapter implements the OutputPresenter port for file output.
/// Missing parent directories are created, matching the behavior callers
/// expect when pointing the report at a build output directory.
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
        let write_err = |details: String| DatastoreError::FileWriteError {
            path: self.output_path.clone(),
            details,
        };

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    write_err(format!(
                        "Error creating folders for path {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        fs::write(&self.output_path, content).map_err(|e| write_err(e.to_string()))?;

        eprintln!("✅ Report exported to {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing the rendered report to stdout
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
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write report to stdout: {}", e))?;
        handle
            .flush()
            .map_err(|e| anyhow::anyhow!("Failed to flush stdout: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_writer_writes_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dependency-report.csv");

        let writer = FileSystemWriter::new(path.clone());
        writer.present("id,license\nfoss1,MIT\n").unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "id,license\nfoss1,MIT\n");
    }

    #[test]
    fn test_file_writer_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("target").join("report").join("out.csv");

        let writer = FileSystemWriter::new(path.clone());
        writer.present("content\n").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_file_writer_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "old content").unwrap();

        let writer = FileSystemWriter::new(path.clone());
        writer.present("new content\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new content\n");
    }
}
