// src/notify/mod.rs

//! Outbound notification of new postings.

pub mod console;
#[cfg(feature = "aws")]
pub mod ses;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Posting, SearchMode};

pub use console::ConsoleNotifier;
#[cfg(feature = "aws")]
pub use ses::SesNotifier;

/// Delivers one formatted message to one recipient.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send a notification containing the given postings.
    async fn send(&self, recipient: &str, subject: &str, postings: &[Posting]) -> Result<()>;
}

/// Subject line for a mode's result batch.
pub fn render_subject(mode: SearchMode, count: usize) -> String {
    format!("New {} LinkedIn Jobs Found! ({} jobs)", mode.label(), count)
}

/// Plain-text message body: one line per field, blank line between postings.
pub fn render_body(postings: &[Posting]) -> String {
    let mut body = String::new();
    for posting in postings {
        body.push_str(&format!(
            "Title: {}\nCompany: {}\nLocation: {}\nLink: {}\nPosted: {}\n\n",
            posting.title, posting.organization, posting.location, posting.link, posting.posted_at
        ));
    }
    body
}
