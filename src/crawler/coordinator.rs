//! Crawl coordinator - shared state and recursive expansion
//!
//! This module owns every piece of mutable shared state in a crawl: the
//! visited-URL set, the collected page records, the concurrency admission
//! gate, and the outstanding-task tracker. Each accepted page fans out one
//! spawned task per discovered link; the crawl is finished when the
//! outstanding-task count returns to zero.

use crate::config::CrawlConfig;
use crate::crawler::extractor::{extract_page, ExtractError, PageRecord};
use crate::crawler::fetcher::{Fetch, FetchError};
use crate::crawler::tracker::CompletionTracker;
use crate::url::{extract_host, normalize_url};
use crate::{CrawlError, UrlError};
use futures::future::BoxFuture;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Semaphore;
use url::Url;

/// Why a visit ended without recording a page, or what it recorded
///
/// Inspected by the task driver, which logs and discards; none of these
/// outcomes propagate to the rest of the crawl.
#[derive(Debug)]
enum VisitOutcome {
    /// The page was fetched, extracted, and stored
    Recorded { links: usize },

    /// The page budget was already exhausted when the task ran
    BudgetReached,

    /// The admission gate was closed underneath the task
    Cancelled,
}

/// Per-branch failures, absorbed by the task driver
///
/// Every variant ends only the branch that hit it: the task finishes
/// without recording a page and without spawning children. Nothing is
/// retried and nothing aborts the crawl.
#[derive(Debug, Error)]
pub enum VisitError {
    #[error("malformed URL: {0}")]
    Malformed(String),

    #[error("host outside crawl scope")]
    OffDomain,

    #[error("already visited")]
    Duplicate,

    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("extract failed: {0}")]
    Extract(#[from] ExtractError),
}

/// Visited keys and collected records, guarded by one lock
///
/// The lock is held only for the check-and-insert and the record store,
/// never across a fetch or any other await point.
#[derive(Debug, Default)]
struct Ledger {
    visited: HashSet<String>,
    pages: HashMap<String, PageRecord>,
}

/// Shared crawl state, passed by `Arc` to every spawned task
struct CrawlState<F> {
    fetcher: F,
    base_host: String,
    max_pages: usize,
    politeness_delay: Duration,
    gate: Semaphore,
    tracker: CompletionTracker,
    ledger: Mutex<Ledger>,
}

impl<F> CrawlState<F> {
    fn page_count(&self) -> usize {
        self.ledger.lock().unwrap().pages.len()
    }
}

/// Main crawler coordinator
///
/// Owns the shared state for one crawl. Independent crawls use independent
/// coordinators; there is no process-wide state.
pub struct Coordinator<F: Fetch> {
    seed_url: String,
    state: Arc<CrawlState<F>>,
}

impl<F: Fetch + 'static> Coordinator<F> {
    /// Creates a coordinator scoped to the seed's host
    ///
    /// This is the only place a URL failure is surfaced to the caller: a
    /// seed that does not parse, or has no host, aborts the crawl before
    /// any task is spawned.
    ///
    /// # Arguments
    ///
    /// * `config` - The crawl configuration, already validated
    /// * `fetcher` - The page fetcher implementation
    pub fn new(config: &CrawlConfig, fetcher: F) -> Result<Self, CrawlError> {
        let seed = Url::parse(&config.seed_url)?;
        let base_host = extract_host(&seed).ok_or(UrlError::MissingHost)?;

        Ok(Self {
            seed_url: config.seed_url.clone(),
            state: Arc::new(CrawlState {
                fetcher,
                base_host,
                max_pages: config.max_pages,
                politeness_delay: config.politeness_delay(),
                gate: Semaphore::new(config.max_concurrency),
                tracker: CompletionTracker::new(),
                ledger: Mutex::new(Ledger::default()),
            }),
        })
    }

    /// Runs the crawl to completion
    ///
    /// Registers one pending task for the seed, then blocks until every
    /// spawned task has finished. Returns the collected records keyed by
    /// normalized URL.
    pub async fn crawl(self) -> HashMap<String, PageRecord> {
        tracing::info!("starting crawl of {}", self.seed_url);

        spawn_visit(Arc::clone(&self.state), self.seed_url.clone());
        self.state.tracker.wait().await;

        let mut ledger = self.state.ledger.lock().unwrap();
        tracing::info!("crawl finished: {} pages collected", ledger.pages.len());
        std::mem::take(&mut ledger.pages)
    }
}

/// Registers a task with the tracker, then spawns it
///
/// The registration happens in the spawning task so the tracker can never
/// transiently read zero while a spawn is pending.
fn spawn_visit<F: Fetch + 'static>(state: Arc<CrawlState<F>>, url: String) {
    state.tracker.register();
    tokio::spawn(drive_visit(state, url));
}

/// Task driver: runs one visit, logs its outcome, signals completion
///
/// Returns a boxed future because visits spawn further visits; the boxing
/// keeps the recursion logical (through the tracker) instead of a
/// recursively sized future type. The tracker decrement is unconditional
/// and symmetric with the registration in [`spawn_visit`].
fn drive_visit<F: Fetch + 'static>(state: Arc<CrawlState<F>>, url: String) -> BoxFuture<'static, ()> {
    Box::pin(async move {
        match visit(&state, &url).await {
            Ok(VisitOutcome::Recorded { links }) => {
                tracing::info!("crawled {} ({} outgoing links)", url, links);
            }
            Ok(VisitOutcome::BudgetReached) => {
                tracing::trace!("skipping {}: page budget reached", url);
            }
            Ok(VisitOutcome::Cancelled) => {
                tracing::trace!("skipping {}: admission gate closed", url);
            }
            Err(e) => {
                tracing::debug!("skipping {}: {}", url, e);
            }
        }
        state.tracker.finish();
    })
}

/// The unit of recursive work: one URL, fetched and expanded
async fn visit<F: Fetch + 'static>(
    state: &Arc<CrawlState<F>>,
    raw_url: &str,
) -> Result<VisitOutcome, VisitError> {
    // Admission: at most `max_concurrency` visits run past this point at
    // once. The permit is released on every exit path below.
    let _permit = match state.gate.acquire().await {
        Ok(permit) => permit,
        Err(_) => return Ok(VisitOutcome::Cancelled),
    };

    // Best-effort budget short-circuit. Concurrent tasks can race past this
    // check before the winner stores its record, so the budget may be
    // exceeded by at most the admission width.
    if state.page_count() >= state.max_pages {
        return Ok(VisitOutcome::BudgetReached);
    }

    let parsed = Url::parse(raw_url).map_err(|e| VisitError::Malformed(e.to_string()))?;
    match extract_host(&parsed) {
        Some(host) if host == state.base_host => {}
        _ => return Err(VisitError::OffDomain),
    }

    let key = normalize_url(raw_url).map_err(|e| VisitError::Malformed(e.to_string()))?;

    // Check-and-insert must be one atomic step: of all tasks racing on the
    // same key, exactly one proceeds, whether the loser's copy is already
    // completed or still in flight.
    {
        let mut ledger = state.ledger.lock().unwrap();
        if !ledger.visited.insert(key.clone()) {
            return Err(VisitError::Duplicate);
        }
    }

    let html = state.fetcher.fetch(raw_url).await?;

    let record = extract_page(&html, raw_url)?;
    let links = record.outgoing_links.clone();
    {
        let mut ledger = state.ledger.lock().unwrap();
        ledger.pages.insert(key, record);
    }

    for link in &links {
        spawn_visit(Arc::clone(state), link.clone());
    }

    // Politeness delay, taken while the admission permit is still held so
    // the request rate stays bounded independent of the concurrency level.
    tokio::time::sleep(state.politeness_delay).await;

    Ok(VisitOutcome::Recorded { links: links.len() })
}
