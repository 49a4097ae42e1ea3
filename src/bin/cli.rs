//! jobscout CLI
//!
//! Local execution entry point. For AWS Lambda, use `jobscout-lambda`.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use jobscout::{
    config::SearchConfig,
    error::Result,
    notify::{ConsoleNotifier, Notifier, SesNotifier},
    pipeline::Pipeline,
    services::SearchPageSource,
    storage::{LocalSeenStore, S3SeenStore, SeenStore},
};

/// jobscout - LinkedIn job watcher
#[derive(Parser, Debug)]
#[command(
    name = "jobscout",
    version,
    about = "Scrapes LinkedIn job search results and emails newly posted jobs"
)]
struct Cli {
    /// Recipient email address
    #[arg(short, long)]
    email: String,

    /// Keep dedup state in a local file instead of S3
    #[arg(long)]
    state_file: Option<PathBuf>,

    /// Print notifications to stdout instead of sending email
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("jobscout starting...");

    let config = Arc::new(SearchConfig::default());
    config.validate()?;

    match (&cli.state_file, cli.dry_run) {
        (Some(path), true) => {
            run(config, LocalSeenStore::new(path), ConsoleNotifier, &cli.email).await?;
        }
        (Some(path), false) => {
            let notifier = SesNotifier::from_env(config.sender.clone()).await;
            run(config, LocalSeenStore::new(path), notifier, &cli.email).await?;
        }
        (None, true) => {
            let store = S3SeenStore::from_env(&config.bucket, &config.state_key).await;
            run(config, store, ConsoleNotifier, &cli.email).await?;
        }
        (None, false) => {
            let store = S3SeenStore::from_env(&config.bucket, &config.state_key).await;
            let notifier = SesNotifier::from_env(config.sender.clone()).await;
            run(config, store, notifier, &cli.email).await?;
        }
    }

    log::info!("Done!");

    Ok(())
}

/// Build the source and run the pipeline over the chosen backends.
async fn run<D, N>(config: Arc<SearchConfig>, store: D, notifier: N, email: &str) -> Result<()>
where
    D: SeenStore,
    N: Notifier,
{
    let source = SearchPageSource::new(Arc::clone(&config))?;
    let report = Pipeline::new(config, source, store, notifier).run(email).await?;

    log::info!(
        "Sent {} notifications covering {} postings",
        report.notifications_sent,
        report.postings_sent
    );
    Ok(())
}
