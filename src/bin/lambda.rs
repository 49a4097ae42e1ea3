//! AWS Lambda entry point for jobscout
//!
//! Deploy with `cargo lambda build --release --features lambda`.
//! Invoke with a payload of `{"email": "<recipient>"}`.

use lambda_runtime::{Error as LambdaError, service_fn};

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the AWS Lambda function.
#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("jobscout Lambda starting...");
    lambda_runtime::run(service_fn(jobscout::lambda::handler)).await
}
