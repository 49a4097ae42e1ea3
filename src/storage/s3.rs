//! AWS S3 seen-set storage.

use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use chrono::Utc;

use crate::error::{AppError, Result};
use crate::models::SeenSet;
use crate::storage::{SaveMetadata, SeenStore};

/// S3-backed seen-set storage.
pub struct S3SeenStore {
    client: Client,
    bucket: String,
    key: String,
}

impl S3SeenStore {
    /// Create a new S3 store for the given blob location.
    pub fn new(client: Client, bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Create an S3 store from environment configuration.
    pub async fn from_env(default_bucket: &str, default_key: &str) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&config);

        let bucket = std::env::var("S3_BUCKET").unwrap_or_else(|_| default_bucket.to_string());
        let key = std::env::var("S3_STATE_KEY").unwrap_or_else(|_| default_key.to_string());

        Self::new(client, bucket, key)
    }

    fn location(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }
}

#[async_trait::async_trait]
impl SeenStore for S3SeenStore {
    async fn load(&self) -> Result<SeenSet> {
        let result = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(&self.key)
            .send()
            .await;

        match result {
            Ok(output) => {
                let bytes = output
                    .body
                    .collect()
                    .await
                    .map_err(AppError::store)?
                    .into_bytes();
                let seen: SeenSet = serde_json::from_slice(&bytes)?;
                Ok(seen)
            }
            Err(err) => {
                let service_err = err.into_service_error();
                if service_err.is_no_such_key() {
                    log::info!("No existing state at {}", self.location());
                    Ok(SeenSet::new())
                } else {
                    Err(AppError::store(service_err))
                }
            }
        }
    }

    async fn save(&self, seen: &SeenSet) -> Result<SaveMetadata> {
        let json = serde_json::to_string(seen)?;
        let bytes = ByteStream::from(json.into_bytes());

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&self.key)
            .body(bytes)
            .content_type("application/json")
            .send()
            .await
            .map_err(AppError::store)?;

        log::info!("Wrote {} seen ids to {}", seen.len(), self.location());

        Ok(SaveMetadata {
            id_count: seen.len(),
            timestamp: Utc::now(),
            location: self.location(),
        })
    }
}
