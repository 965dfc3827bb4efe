use std::path::Path;

use crate::crawl::Crawler;
use crate::error::AppError;
use crate::sink::write_quotes_to_path;
use crate::traits::{Extractor, Fetcher};

/// Crawl every page, then write the collected quotes to `output` as CSV.
///
/// The output file is only touched once the crawl has succeeded. Returns
/// the number of quotes written.
pub async fn export_quotes<F, E>(crawler: &Crawler<F, E>, output: &Path) -> Result<usize, AppError>
where
    F: Fetcher,
    E: Extractor,
{
    tracing::info!("Crawling {}", crawler.base_url());
    let quotes = crawler.crawl().await?;

    write_quotes_to_path(&quotes, output)?;
    Ok(quotes.len())
}
