// src/pipeline/run.rs

//! Pipeline orchestration.
//!
//! One run: load the seen-set, fetch candidates per search mode, partition
//! against the seen-set, drop blocked posters, deliver non-empty batches,
//! persist the seen-set once at the end. Modes are processed strictly in
//! order and any failure is terminal for the run.

use std::sync::Arc;

use serde::Serialize;

use crate::config::SearchConfig;
use crate::error::{AppError, Result};
use crate::models::{Posting, SearchMode};
use crate::notify::{Notifier, render_subject};
use crate::services::PostingSource;
use crate::storage::SeenStore;

/// Counts reported by a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Number of notifications delivered (at most one per mode)
    pub notifications_sent: usize,
    /// Total postings contained in those notifications
    pub postings_sent: usize,
}

/// Orchestrates one scrape-dedup-deliver run.
pub struct Pipeline<S, D, N> {
    config: Arc<SearchConfig>,
    source: S,
    store: D,
    notifier: N,
}

impl<S, D, N> Pipeline<S, D, N>
where
    S: PostingSource,
    D: SeenStore,
    N: Notifier,
{
    /// Create a pipeline over the three collaborators.
    pub fn new(config: Arc<SearchConfig>, source: S, store: D, notifier: N) -> Self {
        Self {
            config,
            source,
            store,
            notifier,
        }
    }

    /// Run the pipeline for one recipient.
    ///
    /// New ids are marked seen before delivery is attempted, so a delivery
    /// failure can drop a notification but never duplicates one. State is
    /// persisted only after every mode has completed; an abort loses the
    /// markers accumulated during this run.
    pub async fn run(&self, recipient: &str) -> Result<RunReport> {
        if recipient.trim().is_empty() {
            return Err(AppError::validation("recipient address is required"));
        }

        let mut seen = self.store.load().await?;
        log::info!("Loaded {} previously sent posting ids", seen.len());

        let mut report = RunReport::default();

        for mode in SearchMode::ALL {
            let candidates = self.source.fetch(mode).await?;

            let fresh: Vec<Posting> = candidates
                .into_iter()
                .filter(|p| seen.mark(&p.id))
                .collect();

            let deliverable: Vec<Posting> = fresh
                .into_iter()
                .filter(|p| {
                    let blocked = self.config.is_blocked(&p.organization);
                    if blocked {
                        log::info!("Filtered out posting from blocked poster: {}", p.organization);
                    }
                    !blocked
                })
                .collect();

            if deliverable.is_empty() {
                log::info!("No new {} jobs to send.", mode);
                continue;
            }

            let subject = render_subject(mode, deliverable.len());
            self.notifier
                .send(recipient, &subject, &deliverable)
                .await?;

            log::info!(
                "Sent {} new {} jobs to {}",
                deliverable.len(),
                mode,
                recipient
            );
            report.notifications_sent += 1;
            report.postings_sent += deliverable.len();
        }

        let meta = self.store.save(&seen).await?;
        log::info!("Persisted {} seen ids to {}", meta.id_count, meta.location);

        Ok(report)
    }
}
