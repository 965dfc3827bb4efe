use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quotes_client::{ReqwestFetcher, SelectorExtractor};
use quotes_core::{Crawler, DEFAULT_BASE_URL, export_quotes};

#[derive(Parser)]
#[command(
    name = "quotes",
    version,
    about = "Scrape every page of quotes.toscrape.com into a CSV file"
)]
struct Cli {
    /// Where the CSV file is written (overwritten if it exists)
    #[arg(short, long, default_value = "quotes.csv")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Setup tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("quotes=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let fetcher = ReqwestFetcher::new().context("Failed to create HTTP client")?;
    let extractor = SelectorExtractor::new().context("Failed to compile quote selectors")?;
    let crawler = Crawler::new(fetcher, extractor, DEFAULT_BASE_URL)?;

    let written = export_quotes(&crawler, &cli.output)
        .await
        .with_context(|| format!("Failed to export quotes to {}", cli.output.display()))?;

    tracing::info!("Wrote {} quotes to {}", written, cli.output.display());

    Ok(())
}
