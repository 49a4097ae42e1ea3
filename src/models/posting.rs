//! Job posting data structure.

use serde::{Deserialize, Serialize};

/// A job posting scraped from the search page.
///
/// Two postings describe the same listing iff their `id` values are equal;
/// the descriptive fields may drift between re-scrapes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Posting {
    /// Opaque unique identifier, used as the dedup key
    pub id: String,

    /// Listing title
    pub title: String,

    /// Name of the posting organization
    pub organization: String,

    /// Listing location
    pub location: String,

    /// Full URL to the listing
    pub link: String,

    /// Human-readable posting date as shown on the page
    pub posted_at: String,
}
