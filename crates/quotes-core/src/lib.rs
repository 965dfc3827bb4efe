pub mod crawl;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod sink;
pub mod traits;

#[cfg(test)]
pub(crate) mod testutil;

pub use crawl::{Crawler, DEFAULT_BASE_URL};
pub use error::AppError;
pub use models::{ListingPage, Quote};
pub use pipeline::export_quotes;
pub use traits::{Extractor, Fetcher};
