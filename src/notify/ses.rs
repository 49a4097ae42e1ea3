//! AWS SES email notifier.

use aws_sdk_ses::Client;
use aws_sdk_ses::types::{Body, Content, Destination, Message};

use crate::error::{AppError, Result};
use crate::models::Posting;
use crate::notify::{Notifier, render_body};

/// SES-backed email notifier.
pub struct SesNotifier {
    client: Client,
    /// Source address; the recipient itself when unset
    sender: Option<String>,
}

impl SesNotifier {
    /// Create a new notifier with the given client.
    pub fn new(client: Client, sender: Option<String>) -> Self {
        Self { client, sender }
    }

    /// Create a notifier from environment configuration.
    pub async fn from_env(sender: Option<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let sender = std::env::var("SES_SENDER").ok().or(sender);
        Self::new(Client::new(&config), sender)
    }
}

#[async_trait::async_trait]
impl Notifier for SesNotifier {
    async fn send(&self, recipient: &str, subject: &str, postings: &[Posting]) -> Result<()> {
        let source = self.sender.as_deref().unwrap_or(recipient);

        let subject = Content::builder()
            .data(subject)
            .build()
            .map_err(AppError::delivery)?;
        let text = Content::builder()
            .data(render_body(postings))
            .build()
            .map_err(AppError::delivery)?;

        let message = Message::builder()
            .subject(subject)
            .body(Body::builder().text(text).build())
            .build();

        self.client
            .send_email()
            .destination(Destination::builder().to_addresses(recipient).build())
            .message(message)
            .source(source)
            .send()
            .await
            .map_err(AppError::delivery)?;

        log::info!("Sent {} postings to {}", postings.len(), recipient);
        Ok(())
    }
}
