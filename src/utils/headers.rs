// src/utils/headers.rs

//! Cosmetic request-header randomization.
//!
//! Browser-looking headers for the search page fetch. Randomized values are
//! drawn from fixed pools through a caller-supplied random source, so tests
//! can pass a seeded generator. Has no semantic effect on results.

use rand::Rng;
use rand::seq::IndexedRandom;
use reqwest::RequestBuilder;

/// User-Agent pool.
pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 13_3_1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.5993.88 Safari/537.36",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:114.0) Gecko/20100101 Firefox/114.0",
    "Mozilla/5.0 (Windows NT 6.1; Win64; x64; rv:109.0) Gecko/20100101 Firefox/109.0",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.6045.134 Mobile Safari/537.36",
    "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 11_7_10) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.4 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:118.0) Gecko/20100101 Firefox/118.0",
    "Mozilla/5.0 (Linux; Android 12; SM-G991U) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.5993.65 Mobile Safari/537.36",
];

/// Referer pool.
pub const REFERERS: &[&str] = &[
    "https://www.google.com/",
    "https://www.bing.com/",
    "https://news.ycombinator.com/",
];

/// Accept-Language pool.
pub const ACCEPT_LANGUAGES: &[&str] = &[
    "en-US,en;q=0.9",
    "en-GB,en;q=0.8",
    "en-AU,en;q=0.9",
    "en-CA,en;q=0.9",
];

/// Pick one entry from a pool using the supplied random source.
pub fn pick<'a, R: Rng + ?Sized>(pool: &'a [&'a str], rng: &mut R) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Decorate a request with browser-looking headers.
pub fn disguise<R: Rng + ?Sized>(request: RequestBuilder, rng: &mut R) -> RequestBuilder {
    request
        .header("User-Agent", pick(USER_AGENTS, rng))
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", pick(ACCEPT_LANGUAGES, rng))
        .header("Referer", pick(REFERERS, rng))
        .header("DNT", "1")
        .header("Connection", "keep-alive")
        .header("Upgrade-Insecure-Requests", "1")
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_pick_is_deterministic_with_seeded_rng() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(pick(USER_AGENTS, &mut a), pick(USER_AGENTS, &mut b));
        }
    }

    #[test]
    fn test_pick_draws_from_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert!(REFERERS.contains(&pick(REFERERS, &mut rng)));
        }
    }

    #[test]
    fn test_pick_empty_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick(&[], &mut rng), "");
    }
}
