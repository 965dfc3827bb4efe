use std::future::Future;

use crate::error::AppError;
use crate::models::ListingPage;

/// Fetches raw HTML content from a URL.
pub trait Fetcher: Send + Sync + Clone {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, AppError>> + Send;
}

/// Turns the HTML of one listing page into quotes plus the pager state.
pub trait Extractor: Send + Sync + Clone {
    /// Returns the page's quotes in document order and whether a next page
    /// is advertised. A page with no quotes is not an error.
    fn extract(&self, html: &str) -> Result<ListingPage, AppError>;
}
