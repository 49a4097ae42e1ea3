// src/services/mod.rs

//! External data sources.

pub mod postings;

pub use postings::{PostingSource, SearchPageSource};
