use std::sync::Arc;

use quotes_core::error::AppError;
use quotes_core::models::{ListingPage, Quote};
use quotes_core::traits::Extractor;
use scraper::{ElementRef, Html, Selector};

/// CSS selectors mapping listing-page markup onto quote fields.
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// One element per quote.
    pub container: String,
    /// First match inside the container becomes `text`.
    pub text: String,
    /// First match inside the container becomes `author`.
    pub author: String,
    /// Every match inside the container becomes a tag, in document order.
    pub tag: String,
    /// Entries of the pagination control.
    pub pager_entry: String,
    /// Class carried by the pager entry that links to the next page.
    pub next_class: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            container: ".quote".to_string(),
            text: ".text".to_string(),
            author: ".author".to_string(),
            tag: ".tag".to_string(),
            pager_entry: ".pager > li".to_string(),
            next_class: "next".to_string(),
        }
    }
}

struct CompiledSelectors {
    container: Selector,
    text: Selector,
    author: Selector,
    tag: Selector,
    pager_entry: Selector,
    next_class: String,
}

/// Listing-page extractor built on the `scraper` HTML parser.
///
/// A container missing its text or author element fails the whole page with
/// [`AppError::MalformedQuote`]; a container without tags yields an empty list.
pub struct SelectorExtractor {
    selectors: Arc<CompiledSelectors>,
}

impl Clone for SelectorExtractor {
    fn clone(&self) -> Self {
        Self {
            selectors: Arc::clone(&self.selectors),
        }
    }
}

impl SelectorExtractor {
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(&SelectorConfig::default())
    }

    pub fn with_config(config: &SelectorConfig) -> Result<Self, AppError> {
        let selectors = CompiledSelectors {
            container: compile(&config.container)?,
            text: compile(&config.text)?,
            author: compile(&config.author)?,
            tag: compile(&config.tag)?,
            pager_entry: compile(&config.pager_entry)?,
            next_class: config.next_class.clone(),
        };

        Ok(Self {
            selectors: Arc::new(selectors),
        })
    }

    /// All quotes on a parsed page, in document order.
    pub fn quotes(&self, document: &Html) -> Result<Vec<Quote>, AppError> {
        document
            .select(&self.selectors.container)
            .enumerate()
            .map(|(index, container)| self.quote(index, container))
            .collect()
    }

    /// Whether any pager entry carries the next-page class.
    pub fn has_next(&self, document: &Html) -> bool {
        document
            .select(&self.selectors.pager_entry)
            .any(|entry| entry.value().classes().any(|c| c == self.selectors.next_class))
    }

    fn quote(&self, index: usize, container: ElementRef<'_>) -> Result<Quote, AppError> {
        let missing = |field| AppError::MalformedQuote {
            page: None,
            index,
            field,
        };
        let text = first_text(container, &self.selectors.text).ok_or_else(|| missing("text"))?;
        let author =
            first_text(container, &self.selectors.author).ok_or_else(|| missing("author"))?;
        let tags = container
            .select(&self.selectors.tag)
            .map(element_text)
            .collect();

        Ok(Quote::new(text, author, tags))
    }
}

impl Extractor for SelectorExtractor {
    fn extract(&self, html: &str) -> Result<ListingPage, AppError> {
        let document = Html::parse_document(html);

        Ok(ListingPage {
            quotes: self.quotes(&document)?,
            has_next: self.has_next(&document),
        })
    }
}

fn compile(selector: &str) -> Result<Selector, AppError> {
    Selector::parse(selector).map_err(|e| AppError::SelectorError {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

fn first_text(container: ElementRef<'_>, selector: &Selector) -> Option<String> {
    container.select(selector).next().map(element_text)
}

/// Concatenated text nodes of an element, untrimmed.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}
