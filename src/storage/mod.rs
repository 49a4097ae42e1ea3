// src/storage/mod.rs

//! Persistence of the delivered-postings record.
//!
//! One JSON blob at a fixed location, mapping posting id to a boolean
//! marker. Whole-value semantics only: the pipeline loads the full set at
//! the start of a run and overwrites it once at the end.

pub mod local;
#[cfg(feature = "aws")]
pub mod s3;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::SeenSet;

pub use local::LocalSeenStore;
#[cfg(feature = "aws")]
pub use s3::S3SeenStore;

/// Metadata about a completed save.
#[derive(Debug, Clone)]
pub struct SaveMetadata {
    /// Number of ids in the saved set
    pub id_count: usize,
    /// Timestamp of the write
    pub timestamp: DateTime<Utc>,
    /// Human-readable location of the blob
    pub location: String,
}

/// Trait for seen-set storage backends.
#[async_trait]
pub trait SeenStore: Send + Sync {
    /// Load the seen-set. An absent blob yields an empty set, not an error.
    async fn load(&self) -> Result<SeenSet>;

    /// Persist the seen-set, overwriting any prior blob.
    async fn save(&self, seen: &SeenSet) -> Result<SaveMetadata>;
}
