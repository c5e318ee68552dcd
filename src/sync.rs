use tracing::{debug, warn};

use crate::error::Result;
use crate::github::SearchBackend;
use crate::models::{RepoQuery, RepositorySummary, SortOrder};
use crate::types::SearchItem;

/// What the view should show right now. Results are only rendered from
/// `Loaded`; a fetch in flight hides the prior snapshot entirely.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewPhase {
    Loading,
    Loaded(Vec<RepositorySummary>),
    Error(String),
}

/// Handle for one issued fetch: the query snapshot the request was built
/// from, plus the sequence number used to fence out stale completions.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: RepoQuery,
}

/// Owns the watched query tuple (term, page, limit, order) and keeps the
/// result snapshot consistent with it: every change to the tuple issues
/// exactly one new fetch, and only the most recently issued fetch is allowed
/// to update the view.
pub struct Synchronizer<B> {
    backend: B,
    term: String,
    page: u32,
    limit: String,
    order: SortOrder,
    phase: ViewPhase,
    issued_seq: u64,
}

impl<B: SearchBackend> Synchronizer<B> {
    pub fn new(backend: B) -> Self {
        Self::with_query(backend, RepoQuery::default())
    }

    pub fn with_query(backend: B, query: RepoQuery) -> Self {
        Synchronizer {
            backend,
            term: query.term,
            page: query.page,
            limit: query.limit,
            order: query.order,
            phase: ViewPhase::Loading,
            issued_seq: 0,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> &str {
        &self.limit
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn phase(&self) -> &ViewPhase {
        &self.phase
    }

    fn query(&self) -> RepoQuery {
        RepoQuery {
            term: self.term.clone(),
            page: self.page,
            limit: self.limit.clone(),
            order: self.order,
        }
    }

    /// Start a fetch: enter `Loading`, bump the sequence counter and snapshot
    /// the current query. The returned ticket must be handed back to
    /// [`apply`](Self::apply) together with the backend's outcome.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued_seq += 1;
        self.phase = ViewPhase::Loading;
        debug!(seq = self.issued_seq, term = %self.term, "issuing search");
        FetchTicket {
            seq: self.issued_seq,
            query: self.query(),
        }
    }

    /// Complete a fetch. Only the latest issued ticket may update the view;
    /// anything older lost the race to a newer query and is discarded.
    /// Returns whether the outcome was applied.
    pub fn apply(&mut self, ticket: &FetchTicket, outcome: Result<Vec<SearchItem>>) -> bool {
        if ticket.seq != self.issued_seq {
            debug!(seq = ticket.seq, latest = self.issued_seq, "discarding stale response");
            return false;
        }

        match outcome {
            Ok(items) => {
                let snapshot: Vec<RepositorySummary> =
                    items.into_iter().map(RepositorySummary::from).collect();
                debug!(count = snapshot.len(), "search completed");
                self.phase = ViewPhase::Loaded(snapshot);
            }
            Err(e) => {
                warn!(error = %e, "search failed");
                self.phase = ViewPhase::Error(e.to_string());
            }
        }
        true
    }

    /// Run one full fetch cycle against the backend.
    pub async fn refresh(&mut self) {
        let ticket = self.begin_fetch();
        let outcome = self.backend.search(&ticket.query).await;
        self.apply(&ticket, outcome);
    }

    /// Change the technology term. Equal values are a no-op; a new value
    /// re-fetches.
    pub async fn set_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.term {
            return;
        }
        self.term = term;
        self.refresh().await;
    }

    /// Change the result page, starting at 1.
    pub async fn set_page(&mut self, page: u32) {
        if page < 1 {
            warn!(page, "ignoring page below 1");
            return;
        }
        if page == self.page {
            return;
        }
        self.page = page;
        self.refresh().await;
    }

    /// Change the page-size limit. The raw control value is stored as-is:
    /// an empty or non-numeric input is carried into the next request's
    /// `per_page` parameter uninterpreted.
    pub async fn set_limit(&mut self, raw: impl Into<String>) {
        let raw = raw.into();
        if raw == self.limit {
            return;
        }
        self.limit = raw;
        self.refresh().await;
    }

    /// Flip the sort order between ascending and descending. Always
    /// re-fetches; no other order values are reachable.
    pub async fn toggle_order(&mut self) {
        self.order = self.order.toggled();
        self.refresh().await;
    }

    /// Re-issue the current query unchanged, e.g. after an error.
    pub async fn retry(&mut self) {
        self.refresh().await;
    }
}
