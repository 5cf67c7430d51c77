//! HTML extractor for building page records
//!
//! This module parses raw HTML into the structured record the crawler
//! collects per page: the title heading, the first body paragraph, and the
//! absolute outgoing link and image URLs.

use scraper::{Html, Selector};
use thiserror::Error;
use url::Url;

/// Structured data extracted from one successfully crawled page
///
/// Created immutably after fetch+extract; the coordinator owns the
/// collection these live in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    /// The original (non-normalized) URL used to fetch the page
    pub url: String,

    /// First `<h1>` text, empty if absent
    pub heading: String,

    /// First paragraph text, preferring a `<main>` region when present
    pub first_paragraph: String,

    /// Absolute URLs resolved from `<a href>`, in discovery order
    pub outgoing_links: Vec<String>,

    /// Absolute URLs resolved from `<img src>`, in discovery order
    pub image_urls: Vec<String>,
}

/// Errors produced while extracting a page record
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid selector: {0}")]
    Selector(String),

    #[error("invalid base URL: {0}")]
    BaseUrl(String),
}

fn selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Selector(e.to_string()))
}

/// Extracts a [`PageRecord`] from raw HTML
///
/// Relative `href`/`src` values are resolved against `page_url`; a
/// root-relative `"/"` reference resolves to `page_url` itself.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `page_url` - The URL the page was fetched from
pub fn extract_page(html: &str, page_url: &str) -> Result<PageRecord, ExtractError> {
    let document = Html::parse_document(html);
    let base_url =
        Url::parse(page_url).map_err(|e| ExtractError::BaseUrl(format!("{}: {}", page_url, e)))?;

    Ok(PageRecord {
        url: page_url.to_string(),
        heading: first_heading(&document)?,
        first_paragraph: first_paragraph(&document)?,
        outgoing_links: collect_refs(&document, "a[href]", "href", page_url, &base_url)?,
        image_urls: collect_refs(&document, "img[src]", "src", page_url, &base_url)?,
    })
}

/// Returns the text of the first `<h1>` element, empty if there is none
fn first_heading(document: &Html) -> Result<String, ExtractError> {
    let h1 = selector("h1")?;

    Ok(document
        .select(&h1)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default())
}

/// Returns the first paragraph text
///
/// When the document has a `<main>` element, only paragraphs inside it are
/// considered, even if that yields nothing. Otherwise the first `<p>`
/// anywhere wins.
fn first_paragraph(document: &Html) -> Result<String, ExtractError> {
    let main = selector("main")?;

    let paragraph = if document.select(&main).next().is_some() {
        let main_p = selector("main p")?;
        document.select(&main_p).next()
    } else {
        let p = selector("p")?;
        document.select(&p).next()
    };

    Ok(paragraph
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default())
}

/// Collects absolute URLs from one attribute of matching elements
///
/// Absolute references are kept verbatim. Relative references resolve
/// against the page URL, except the bare root reference `/`, which stands
/// for the page URL itself.
fn collect_refs(
    document: &Html,
    css: &str,
    attr: &str,
    page_url: &str,
    base_url: &Url,
) -> Result<Vec<String>, ExtractError> {
    let sel = selector(css)?;
    let mut refs = Vec::new();

    for element in document.select(&sel) {
        let Some(value) = element.value().attr(attr) else {
            continue;
        };

        match Url::parse(value) {
            Ok(_) => refs.push(value.to_string()),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                if value == "/" {
                    refs.push(page_url.to_string());
                } else if let Ok(resolved) = base_url.join(value) {
                    refs.push(resolved.to_string());
                }
            }
            Err(_) => continue,
        }
    }

    Ok(refs)
}
