use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Local};

use crate::domain::ports::ErrorSink;
use crate::utils::error::Result;

/// Append-only failure log, one `[timestamp] event` line per record.
#[derive(Debug, Clone)]
pub struct FileErrorSink {
    path: PathBuf,
}

impl FileErrorSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ErrorSink for FileErrorSink {
    async fn record(&self, event: &str, timestamp: DateTime<Local>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "[{}] {}", timestamp.to_rfc3339(), event)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn record_appends_timestamped_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("errors.log");
        let sink = FileErrorSink::new(&path);

        sink.record("first failure", Local::now()).await.unwrap();
        sink.record("second failure", Local::now()).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("first failure"));
        assert!(lines[1].ends_with("second failure"));
    }

    #[tokio::test]
    async fn record_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("errors.log");
        let sink = FileErrorSink::new(&path);

        sink.record("nested failure", Local::now()).await.unwrap();
        assert!(path.exists());
    }
}
