//! Console notifier for dry runs.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Posting;
use crate::notify::{Notifier, render_body};

/// Prints the message instead of delivering it.
#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn send(&self, recipient: &str, subject: &str, postings: &[Posting]) -> Result<()> {
        println!("To: {recipient}");
        println!("Subject: {subject}");
        println!("{}", render_body(postings));
        Ok(())
    }
}
