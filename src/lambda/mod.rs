// src/lambda/mod.rs

//! AWS Lambda handler for jobscout.
//!
//! One invocation runs the full pipeline: load the sent-postings blob from
//! S3, scrape each search mode, email new postings via SES, persist the
//! updated blob.

use std::sync::Arc;

use lambda_runtime::{Error as LambdaError, LambdaEvent};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::config::SearchConfig;
use crate::error::Result;
use crate::notify::SesNotifier;
use crate::pipeline::{Pipeline, RunReport};
use crate::services::SearchPageSource;
use crate::storage::S3SeenStore;

/// Lambda invocation payload.
#[derive(Debug, Deserialize)]
pub struct NotifyRequest {
    /// Recipient email address
    pub email: String,
}

/// Lambda response payload.
#[derive(Debug, Serialize)]
pub struct NotifyResponse {
    /// Whether the run completed fully
    pub success: bool,

    /// Number of notifications delivered
    pub notifications_sent: usize,

    /// Total postings contained in those notifications
    pub postings_sent: usize,

    /// Error message if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Execution time in milliseconds
    pub execution_time_ms: u64,
}

impl Default for NotifyResponse {
    fn default() -> Self {
        Self {
            success: false,
            notifications_sent: 0,
            postings_sent: 0,
            error: None,
            execution_time_ms: 0,
        }
    }
}

/// Main Lambda handler function.
#[instrument(skip(event))]
pub async fn handler(
    event: LambdaEvent<NotifyRequest>,
) -> std::result::Result<NotifyResponse, LambdaError> {
    let start = std::time::Instant::now();
    let (request, _context) = event.into_parts();

    info!("Starting notification run");

    match run_notify(&request).await {
        Ok(report) => {
            let elapsed = start.elapsed().as_millis() as u64;
            info!(
                "Run completed: {} notifications, {} postings in {}ms",
                report.notifications_sent, report.postings_sent, elapsed
            );
            Ok(NotifyResponse {
                success: true,
                notifications_sent: report.notifications_sent,
                postings_sent: report.postings_sent,
                error: None,
                execution_time_ms: elapsed,
            })
        }
        Err(e) => {
            error!("Run failed: {}", e);
            Ok(NotifyResponse {
                success: false,
                error: Some(e.to_string()),
                execution_time_ms: start.elapsed().as_millis() as u64,
                ..Default::default()
            })
        }
    }
}

/// Internal run logic.
async fn run_notify(request: &NotifyRequest) -> Result<RunReport> {
    let config = Arc::new(load_lambda_config()?);

    let aws = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = S3SeenStore::new(
        aws_sdk_s3::Client::new(&aws),
        &config.bucket,
        &config.state_key,
    );
    let notifier = SesNotifier::new(aws_sdk_ses::Client::new(&aws), config.sender.clone());
    let source = SearchPageSource::new(Arc::clone(&config))?;

    Pipeline::new(config, source, store, notifier)
        .run(&request.email)
        .await
}

/// Load configuration suitable for the Lambda environment.
fn load_lambda_config() -> Result<SearchConfig> {
    let mut config = SearchConfig::default();

    if let Ok(timeout) = std::env::var("FETCH_TIMEOUT_SECS") {
        if let Ok(secs) = timeout.parse() {
            config.timeout_secs = secs;
        }
    }

    if let Ok(recency) = std::env::var("RECENCY_SECS") {
        if let Ok(secs) = recency.parse() {
            config.recency_secs = secs;
        }
    }

    if let Ok(bucket) = std::env::var("S3_BUCKET") {
        config.bucket = bucket;
    }

    if let Ok(key) = std::env::var("S3_STATE_KEY") {
        config.state_key = key;
    }

    if let Ok(sender) = std::env::var("SES_SENDER") {
        config.sender = Some(sender);
    }

    config.validate()?;
    Ok(config)
}
