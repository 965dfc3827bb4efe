use url::Url;

use crate::error::AppError;
use crate::models::Quote;
use crate::traits::{Extractor, Fetcher};

/// Site crawled by default.
pub const DEFAULT_BASE_URL: &str = "https://quotes.toscrape.com";

/// Build the listing URL for a 1-indexed page number.
pub fn page_url(base_url: &str, page: u64) -> String {
    format!("{}/page/{}", base_url.trim_end_matches('/'), page)
}

/// Walks the paginated listing: fetch → extract → follow "next" until the
/// pager stops advertising one.
///
/// Generic over the fetcher and extractor so it can be driven by mocks in
/// tests. Pages are fetched strictly one after another.
pub struct Crawler<F, E>
where
    F: Fetcher,
    E: Extractor,
{
    fetcher: F,
    extractor: E,
    base_url: String,
    max_pages: Option<u64>,
}

impl<F, E> Crawler<F, E>
where
    F: Fetcher,
    E: Extractor,
{
    /// Create a crawler rooted at `base_url`.
    ///
    /// The base URL must be an absolute http(s) URL.
    pub fn new(fetcher: F, extractor: E, base_url: &str) -> Result<Self, AppError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| AppError::ConfigError(format!("Invalid base URL '{base_url}': {e}")))?;

        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(AppError::ConfigError(format!(
                    "Base URL scheme '{scheme}' is not allowed (only http/https)"
                )));
            }
        }

        Ok(Self {
            fetcher,
            extractor,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_pages: None,
        })
    }

    /// Stop after `max_pages` pages even if the pager still advertises more.
    ///
    /// Off by default: without a cap a site that always links a next page
    /// is crawled forever.
    pub fn with_max_pages(mut self, max_pages: u64) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Crawl every page and return all quotes, in page order then in-page order.
    ///
    /// The first fetch or extraction error aborts the crawl; nothing gathered
    /// so far is returned.
    pub async fn crawl(&self) -> Result<Vec<Quote>, AppError> {
        let mut page: u64 = 1;
        let mut quotes = Vec::new();

        loop {
            let url = page_url(&self.base_url, page);
            tracing::debug!("Fetching {}", url);

            let html = self
                .fetcher
                .fetch(&url)
                .await
                .inspect_err(|e| tracing::warn!(page, "Fetching {} failed: {e}", url))?;
            let listing = self
                .extractor
                .extract(&html)
                .map_err(|e| e.on_page(page))
                .inspect_err(|e| tracing::warn!(page, "Extracting {} failed: {e}", url))?;

            tracing::info!(
                page,
                bytes = html.len(),
                quotes = listing.quotes.len(),
                "Page scraped"
            );
            quotes.extend(listing.quotes);

            if !listing.has_next {
                break;
            }

            if self.max_pages.is_some_and(|max| page >= max) {
                tracing::warn!(page, "Page limit reached while a next page is still advertised");
                break;
            }

            page += 1;
        }

        tracing::info!(pages = page, quotes = quotes.len(), "Crawl complete");
        Ok(quotes)
    }
}
