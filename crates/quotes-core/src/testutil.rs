//! Test utilities: mock implementations of the core traits.
//!
//! Handwritten mocks for dependency injection in unit tests.
//! All mocks use `Arc<Mutex<_>>` for interior mutability, allowing
//! test assertions on recorded calls.

use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::models::ListingPage;
use crate::traits::{Extractor, Fetcher};

// ---------------------------------------------------------------------------
// MockFetcher
// ---------------------------------------------------------------------------

/// Mock fetcher that returns queued responses and records requested URLs.
#[derive(Clone)]
pub struct MockFetcher {
    /// Queue of responses. Each call pops the first element.
    /// If empty, returns a default HTML string.
    responses: Arc<Mutex<Vec<Result<String, AppError>>>>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    pub fn empty() -> Self {
        Self::with_responses(Vec::new())
    }

    pub fn new(html: &str) -> Self {
        Self::with_responses(vec![Ok(html.to_string())])
    }

    pub fn with_responses(responses: Vec<Result<String, AppError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// URLs fetched so far, in call order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        self.requested.lock().unwrap().push(url.to_string());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok("<html><body>default</body></html>".to_string())
        } else {
            responses.remove(0)
        }
    }
}

// ---------------------------------------------------------------------------
// MockExtractor
// ---------------------------------------------------------------------------

/// Mock extractor that returns queued pages and records the HTML it was given.
#[derive(Clone)]
pub struct MockExtractor {
    /// If empty, returns a page with no quotes and no next link.
    pages: Arc<Mutex<Vec<Result<ListingPage, AppError>>>>,
    seen: Arc<Mutex<Vec<String>>>,
}

impl MockExtractor {
    pub fn empty() -> Self {
        Self::with_pages(Vec::new())
    }

    pub fn with_pages(pages: Vec<Result<ListingPage, AppError>>) -> Self {
        Self {
            pages: Arc::new(Mutex::new(pages)),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// HTML documents passed to `extract`, in call order.
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl Extractor for MockExtractor {
    fn extract(&self, html: &str) -> Result<ListingPage, AppError> {
        self.seen.lock().unwrap().push(html.to_string());

        let mut pages = self.pages.lock().unwrap();
        if pages.is_empty() {
            Ok(ListingPage::default())
        } else {
            pages.remove(0)
        }
    }
}
