use thiserror::Error;

/// Application-wide error types for the quote scraper.
///
/// Every variant is fatal: the pipeline never recovers from an error, it
/// propagates it to the caller and stops.
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP request failed (non-success status or unreadable body).
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Network/connection error.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Request timed out.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// A quote container was found but a required field was missing.
    #[error(
        "Malformed quote #{index}{}: missing required field '{field}'",
        page_label(.page)
    )]
    MalformedQuote {
        /// 1-indexed listing page, once known.
        page: Option<u64>,
        /// 0-based position of the container on its page.
        index: usize,
        field: &'static str,
    },

    /// A CSS selector in the extractor configuration could not be parsed.
    #[error("Invalid selector '{selector}': {message}")]
    SelectorError { selector: String, message: String },

    /// Invalid configuration (e.g. a base URL that does not parse).
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Writing the output file failed.
    #[error("Write error: {0}")]
    WriteError(#[from] std::io::Error),

    /// CSV encoding or decoding failed.
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl AppError {
    /// Attach the listing page number to errors that carry one.
    pub fn on_page(self, page: u64) -> Self {
        match self {
            AppError::MalformedQuote { index, field, .. } => AppError::MalformedQuote {
                page: Some(page),
                index,
                field,
            },
            other => other,
        }
    }

    /// Returns true if the error originated at the network boundary.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            AppError::HttpError(_) | AppError::NetworkError(_) | AppError::Timeout(_)
        )
    }
}

fn page_label(page: &Option<u64>) -> String {
    match page {
        Some(page) => format!(" on page {page}"),
        None => String::new(),
    }
}
