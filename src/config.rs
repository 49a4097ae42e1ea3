// src/config.rs

//! Application configuration.
//!
//! All search parameters are fixed at build time. The Lambda entry point may
//! override a handful of operational values from environment variables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Search and delivery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Keyword expression for the job search query
    #[serde(default = "defaults::keywords")]
    pub keywords: String,

    /// LinkedIn geo identifier used by the remote-scoped search
    #[serde(default = "defaults::geo_id")]
    pub geo_id: String,

    /// Work-type filter value selecting remote positions
    #[serde(default = "defaults::remote_filter")]
    pub remote_filter: String,

    /// Only postings newer than this many seconds are requested
    #[serde(default = "defaults::recency_secs")]
    pub recency_secs: u64,

    /// Locality name for the local-scoped search
    #[serde(default = "defaults::location")]
    pub location: String,

    /// Search radius for the local-scoped search, in miles
    #[serde(default = "defaults::distance")]
    pub distance: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Posters whose listings are suppressed from delivery.
    /// Only entries mapped to `true` are blocked.
    #[serde(default = "defaults::blocked_posters")]
    pub blocked_posters: HashMap<String, bool>,

    /// S3 bucket holding the sent-postings blob
    #[serde(default = "defaults::bucket")]
    pub bucket: String,

    /// Object key of the sent-postings blob
    #[serde(default = "defaults::state_key")]
    pub state_key: String,

    /// Source address for outgoing mail; the recipient itself when unset
    #[serde(default)]
    pub sender: Option<String>,
}

impl SearchConfig {
    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.keywords.trim().is_empty() {
            return Err(AppError::validation("keywords is empty"));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::validation("timeout_secs must be > 0"));
        }
        if self.recency_secs == 0 {
            return Err(AppError::validation("recency_secs must be > 0"));
        }
        if self.bucket.trim().is_empty() {
            return Err(AppError::validation("bucket is empty"));
        }
        if self.state_key.trim().is_empty() {
            return Err(AppError::validation("state_key is empty"));
        }
        Ok(())
    }

    /// Whether a poster is on the blocklist.
    pub fn is_blocked(&self, organization: &str) -> bool {
        self.blocked_posters
            .get(organization)
            .copied()
            .unwrap_or(false)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            keywords: defaults::keywords(),
            geo_id: defaults::geo_id(),
            remote_filter: defaults::remote_filter(),
            recency_secs: defaults::recency_secs(),
            location: defaults::location(),
            distance: defaults::distance(),
            timeout_secs: defaults::timeout(),
            blocked_posters: defaults::blocked_posters(),
            bucket: defaults::bucket(),
            state_key: defaults::state_key(),
            sender: None,
        }
    }
}

mod defaults {
    use std::collections::HashMap;

    pub fn keywords() -> String {
        "Engineer OR Developer AND (Golang OR Typescript OR React)".into()
    }
    pub fn geo_id() -> String {
        // USA
        "103644278".into()
    }
    pub fn remote_filter() -> String {
        "2".into()
    }
    pub fn recency_secs() -> u64 {
        600
    }
    pub fn location() -> String {
        "San Antonio".into()
    }
    pub fn distance() -> String {
        "100".into()
    }
    pub fn timeout() -> u64 {
        10
    }
    pub fn blocked_posters() -> HashMap<String, bool> {
        HashMap::from([
            ("DataAnnotation".to_string(), true),
            ("Jobs via Dice".to_string(), true),
        ])
    }
    pub fn bucket() -> String {
        "linkedin-jobs".into()
    }
    pub fn state_key() -> String {
        "sent_jobs.json".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_keywords() {
        let mut config = SearchConfig::default();
        config.keywords = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = SearchConfig::default();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn blocklist_matches_exactly() {
        let config = SearchConfig::default();
        assert!(config.is_blocked("DataAnnotation"));
        assert!(!config.is_blocked("DataAnnotation "));
        assert!(!config.is_blocked("Acme"));
    }

    #[test]
    fn blocklist_false_marker_does_not_block() {
        let mut config = SearchConfig::default();
        config.blocked_posters.insert("Acme".into(), false);
        assert!(!config.is_blocked("Acme"));
    }
}
