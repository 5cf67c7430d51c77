//! CSV report writer
//!
//! Serializes the final page collection to a tabular report: one row per
//! record, with the outgoing link and image URL lists joined by `;`.

use crate::crawler::PageRecord;
use crate::CrawlError;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

const HEADER: [&str; 5] = [
    "page_url",
    "h1",
    "first_paragraph",
    "outgoing_link_urls",
    "image_urls",
];

/// One report row, serialized in header order
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    page_url: &'a str,
    h1: &'a str,
    first_paragraph: &'a str,
    outgoing_link_urls: String,
    image_urls: String,
}

impl<'a> ReportRow<'a> {
    fn from_record(record: &'a PageRecord) -> Self {
        Self {
            page_url: &record.url,
            h1: &record.heading,
            first_paragraph: &record.first_paragraph,
            outgoing_link_urls: record.outgoing_links.join(";"),
            image_urls: record.image_urls.join(";"),
        }
    }
}

/// Writes the crawl report to `path`
///
/// Rows are sorted by normalized key so repeated runs over the same site
/// produce identical reports.
///
/// # Arguments
///
/// * `pages` - The final record collection keyed by normalized URL
/// * `path` - Destination file; created or truncated
pub fn write_csv_report(pages: &HashMap<String, PageRecord>, path: &Path) -> Result<(), CrawlError> {
    // The header is written up front so it is present even for an empty
    // collection; serde's auto-header would skip it in that case.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(HEADER)?;

    let mut keys: Vec<&String> = pages.keys().collect();
    keys.sort();

    for key in keys {
        writer.serialize(ReportRow::from_record(&pages[key]))?;
    }

    writer.flush()?;
    Ok(())
}
