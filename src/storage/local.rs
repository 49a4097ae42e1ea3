//! Local filesystem seen-set storage.
//!
//! Keeps the blob in a single JSON file. Intended for development runs and
//! tests; production deployments use S3SeenStore.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::SeenSet;
use crate::storage::{SaveMetadata, SeenStore};

/// File-backed seen-set storage.
#[derive(Clone)]
pub struct LocalSeenStore {
    path: PathBuf,
}

impl LocalSeenStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl SeenStore for LocalSeenStore {
    async fn load(&self) -> Result<SeenSet> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No existing state at {}", self.path.display());
                Ok(SeenSet::new())
            }
            Err(e) => Err(AppError::store(e)),
        }
    }

    async fn save(&self, seen: &SeenSet) -> Result<SaveMetadata> {
        let bytes = serde_json::to_vec(seen)?;
        self.write_bytes(&bytes).await.map_err(|e| match e {
            AppError::Io(io) => AppError::store(io),
            other => other,
        })?;

        Ok(SaveMetadata {
            id_count: seen.len(),
            timestamp: Utc::now(),
            location: self.path.display().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalSeenStore::new(dir.path().join("sent_jobs.json"));

        let seen = store.load().await.unwrap();
        assert!(seen.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalSeenStore::new(dir.path().join("sent_jobs.json"));

        let mut seen = SeenSet::new();
        seen.mark("A");
        seen.mark("B");

        let meta = store.save(&seen).await.unwrap();
        assert_eq!(meta.id_count, 2);

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, seen);
    }

    #[tokio::test]
    async fn test_save_overwrites_prior_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalSeenStore::new(dir.path().join("sent_jobs.json"));

        let mut first = SeenSet::new();
        first.mark("A");
        store.save(&first).await.unwrap();

        let mut second = SeenSet::new();
        second.mark("B");
        store.save(&second).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert!(!loaded.contains("A"));
        assert!(loaded.contains("B"));
    }
}
