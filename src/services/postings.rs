// src/services/postings.rs

//! Job posting source.
//!
//! Fetches the job search page for a given mode and extracts candidate
//! postings using fixed CSS selectors.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};

use crate::config::SearchConfig;
use crate::error::{AppError, Result};
use crate::models::{Posting, SearchMode};
use crate::utils::headers;
use crate::utils::url::{URN_PREFIX, extract_posting_id};

/// Base URL of the job search page.
const SEARCH_URL: &str = "https://www.linkedin.com/jobs/search/";

/// Source of candidate job postings for a search mode.
#[async_trait]
pub trait PostingSource: Send + Sync {
    /// Fetch candidate postings for one mode.
    ///
    /// Fails with `NoResults` when the page explicitly reports zero
    /// matches, `Fetch` on transport errors, and `Parse` when the response
    /// cannot be interpreted.
    async fn fetch(&self, mode: SearchMode) -> Result<Vec<Posting>>;
}

/// Production posting source scraping the live search page.
pub struct SearchPageSource {
    config: Arc<SearchConfig>,
    client: Client,
}

impl SearchPageSource {
    /// Create a new source with the given configuration.
    pub fn new(config: Arc<SearchConfig>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    /// Build the search URL for a mode.
    pub fn search_url(&self, mode: SearchMode) -> Result<url::Url> {
        let config = &self.config;
        let mut url = url::Url::parse(SEARCH_URL)?;
        let recency = format!("r{}", config.recency_secs);

        {
            let mut params = url.query_pairs_mut();
            match mode {
                SearchMode::Remote => {
                    params.append_pair("geoId", &config.geo_id);
                    params.append_pair("f_WT", &config.remote_filter);
                    params.append_pair("keywords", &config.keywords);
                    params.append_pair("f_TPR", &recency);
                }
                SearchMode::Local => {
                    params.append_pair("keywords", &config.keywords);
                    params.append_pair("f_TPR", &recency);
                    params.append_pair("location", &config.location);
                    params.append_pair("distance", &config.distance);
                }
            }
        }

        Ok(url)
    }
}

#[async_trait]
impl PostingSource for SearchPageSource {
    async fn fetch(&self, mode: SearchMode) -> Result<Vec<Posting>> {
        let url = self.search_url(mode)?;
        log::info!("Checking {} jobs on {}", mode, url);

        let request = headers::disguise(self.client.get(url), &mut rand::rng());
        let html = request.send().await?.text().await?;

        parse_search_page(&html, mode)
    }
}

/// Extract postings from a search results page.
pub fn parse_search_page(html: &str, mode: SearchMode) -> Result<Vec<Posting>> {
    let document = Html::parse_document(html);

    let no_results_sel = parse_selector(".no-results")?;
    if document.select(&no_results_sel).next().is_some() {
        return Err(AppError::no_results(mode));
    }

    let row_sel = parse_selector(".jobs-search__results-list li")?;
    let card_sel = parse_selector(".base-card")?;
    let title_sel = parse_selector(".base-search-card__title")?;
    let org_sel = parse_selector(".base-search-card__subtitle a")?;
    let location_sel = parse_selector(".job-search-card__location")?;
    let link_sel = parse_selector(".base-card__full-link")?;
    let date_sel = parse_selector(".job-search-card__listdate")?;

    let mut postings = Vec::new();
    for row in document.select(&row_sel) {
        let urn = row
            .select(&card_sel)
            .next()
            .and_then(|card| card.value().attr("data-entity-urn"))
            .unwrap_or("");
        let id = urn.strip_prefix(URN_PREFIX).unwrap_or(urn).to_string();

        let link = row
            .select(&link_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
            .unwrap_or("")
            .to_string();

        // Recover the id from the listing link when the URN attribute is
        // missing; rows without any id cannot be deduplicated and are skipped.
        let id = if id.is_empty() {
            match extract_posting_id(&link) {
                Some(id) => id,
                None => {
                    log::warn!("Skipping row without a posting id (link: {:?})", link);
                    continue;
                }
            }
        } else {
            id
        };

        postings.push(Posting {
            id,
            title: select_text(&row, &title_sel),
            organization: select_text(&row, &org_sel),
            location: select_text(&row, &location_sel),
            link,
            posted_at: select_text(&row, &date_sel),
        });
    }

    Ok(postings)
}

fn select_text(row: &scraper::ElementRef, selector: &Selector) -> String {
    row.select(selector)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::parse(s, format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> SearchPageSource {
        SearchPageSource::new(Arc::new(SearchConfig::default())).unwrap()
    }

    const RESULTS_PAGE: &str = r#"
        <html><body>
        <ul class="jobs-search__results-list">
          <li>
            <div class="base-card" data-entity-urn="urn:li:jobPosting:4012345678">
              <a class="base-card__full-link" href="https://www.linkedin.com/jobs/view/rust-engineer-at-acme-4012345678">x</a>
              <h3 class="base-search-card__title"> Rust Engineer </h3>
              <h4 class="base-search-card__subtitle"><a href="https://example.com/company">Acme</a></h4>
              <span class="job-search-card__location">Remote, USA</span>
              <time class="job-search-card__listdate">2 minutes ago</time>
            </div>
          </li>
          <li>
            <div class="base-card">
              <a class="base-card__full-link" href="https://www.linkedin.com/jobs/view/dev-3984840917?refId=a">x</a>
              <h3 class="base-search-card__title">Developer</h3>
              <h4 class="base-search-card__subtitle"><a href="https://example.com/company">DataAnnotation</a></h4>
              <span class="job-search-card__location">San Antonio, TX</span>
            </div>
          </li>
          <li>
            <div class="base-card">
              <h3 class="base-search-card__title">No id at all</h3>
            </div>
          </li>
        </ul>
        </body></html>"#;

    #[test]
    fn test_parse_extracts_fields() {
        let postings = parse_search_page(RESULTS_PAGE, SearchMode::Remote).unwrap();
        assert_eq!(postings.len(), 2);

        let first = &postings[0];
        assert_eq!(first.id, "4012345678");
        assert_eq!(first.title, "Rust Engineer");
        assert_eq!(first.organization, "Acme");
        assert_eq!(first.location, "Remote, USA");
        assert_eq!(
            first.link,
            "https://www.linkedin.com/jobs/view/rust-engineer-at-acme-4012345678"
        );
        assert_eq!(first.posted_at, "2 minutes ago");
    }

    #[test]
    fn test_parse_recovers_id_from_link() {
        let postings = parse_search_page(RESULTS_PAGE, SearchMode::Remote).unwrap();
        assert_eq!(postings[1].id, "3984840917");
        assert_eq!(postings[1].posted_at, "");
    }

    #[test]
    fn test_parse_skips_rows_without_id() {
        let postings = parse_search_page(RESULTS_PAGE, SearchMode::Remote).unwrap();
        assert!(postings.iter().all(|p| !p.id.is_empty()));
    }

    #[test]
    fn test_no_results_marker_is_an_error() {
        let html = r#"<html><body><div class="no-results">Nothing</div></body></html>"#;
        let err = parse_search_page(html, SearchMode::Local).unwrap_err();
        assert!(matches!(err, AppError::NoResults { .. }));
    }

    #[test]
    fn test_page_without_rows_is_empty_not_error() {
        let html = "<html><body><p>unrelated</p></body></html>";
        let postings = parse_search_page(html, SearchMode::Remote).unwrap();
        assert!(postings.is_empty());
    }

    #[test]
    fn test_remote_url_parameters() {
        let url = source().search_url(SearchMode::Remote).unwrap();
        let query: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert!(query.contains(&("geoId".into(), "103644278".into())));
        assert!(query.contains(&("f_WT".into(), "2".into())));
        assert!(query.contains(&("f_TPR".into(), "r600".into())));
        assert!(!query.iter().any(|(k, _)| k == "location"));
    }

    #[test]
    fn test_local_url_parameters() {
        let url = source().search_url(SearchMode::Local).unwrap();
        let query: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert!(query.contains(&("location".into(), "San Antonio".into())));
        assert!(query.contains(&("distance".into(), "100".into())));
        assert!(!query.iter().any(|(k, _)| k == "geoId"));
    }
}
